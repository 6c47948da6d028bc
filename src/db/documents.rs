//! Document metadata database operations

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::Result;

/// Metadata row for one processed document.
///
/// `total_pages` only ever describes artifacts that are fully durable: the
/// row is inserted after every page upload has succeeded, and is never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DocumentRecord {
    pub id: String,
    pub pdf_name: String,
    /// Page count of the source PDF.
    pub page_count: i64,
    pub access_token: String,
    /// Number of rendered HTML pages stored under the token.
    pub total_pages: i64,
    pub created_at: String,
}

/// Fields of a document record to insert.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub pdf_name: String,
    pub page_count: i64,
    pub access_token: String,
    pub total_pages: i64,
}

/// Document repository
pub struct DocumentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the metadata row for a freshly processed document.
    pub async fn insert(&self, doc: &NewDocument) -> Result<DocumentRecord> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO pdf_documents (id, pdf_name, page_count, access_token, total_pages, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&doc.pdf_name)
        .bind(doc.page_count)
        .bind(&doc.access_token)
        .bind(doc.total_pages)
        .bind(&created_at)
        .execute(self.pool)
        .await?;

        Ok(DocumentRecord {
            id,
            pdf_name: doc.pdf_name.clone(),
            page_count: doc.page_count,
            access_token: doc.access_token.clone(),
            total_pages: doc.total_pages,
            created_at,
        })
    }

    /// Look up a document by its access token. The token column is unique,
    /// so this returns at most one row.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<DocumentRecord>> {
        let record = sqlx::query_as::<_, DocumentRecord>(
            r#"
            SELECT id, pdf_name, page_count, access_token, total_pages, created_at
            FROM pdf_documents
            WHERE access_token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize_schema;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        initialize_schema(&pool).await.unwrap();
        pool
    }

    fn sample(token: &str) -> NewDocument {
        NewDocument {
            pdf_name: "report.pdf".to_string(),
            page_count: 12,
            access_token: token.to_string(),
            total_pages: 3,
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_token() {
        let pool = memory_pool().await;
        let repo = DocumentRepository::new(&pool);

        repo.insert(&sample("tok_a")).await.unwrap();

        let found = repo.find_by_token("tok_a").await.unwrap().unwrap();
        assert_eq!(found.pdf_name, "report.pdf");
        assert_eq!(found.page_count, 12);
        assert_eq!(found.total_pages, 3);
    }

    #[tokio::test]
    async fn unknown_token_returns_none() {
        let pool = memory_pool().await;
        let repo = DocumentRepository::new(&pool);

        assert!(repo.find_by_token("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_token_is_rejected() {
        let pool = memory_pool().await;
        let repo = DocumentRepository::new(&pool);

        repo.insert(&sample("tok_dup")).await.unwrap();
        assert!(repo.insert(&sample("tok_dup")).await.is_err());
    }

    #[tokio::test]
    async fn zero_page_document_is_valid() {
        let pool = memory_pool().await;
        let repo = DocumentRepository::new(&pool);

        let mut doc = sample("tok_empty");
        doc.total_pages = 0;
        repo.insert(&doc).await.unwrap();

        let found = repo.find_by_token("tok_empty").await.unwrap().unwrap();
        assert_eq!(found.total_pages, 0);
    }
}
