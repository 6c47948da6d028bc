//! ScrollForge Server Library
//!
//! Converts uploaded PDFs into fixed-size batches of rendered HTML pages,
//! stores each page in an S3-compatible bucket under a random access token,
//! and serves token-scoped page lookups.
//!
//! # Modules
//!
//! - `extract`: text-extraction collaborator (trait + PDF implementation)
//! - `convert`: filter, paginator, renderer, and token generator
//! - `storage`: artifact store (trait + S3 client)
//! - `db`: SQLite document metadata
//! - `routes`: HTTP surface

pub mod config;
pub mod convert;
pub mod db;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod storage;
