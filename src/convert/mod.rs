//! PDF-to-HTML conversion core
//!
//! The pipeline that turns extracted text units into stored page artifacts:
//! filter out noise blocks, group the survivors into fixed-size batches,
//! render each batch as a self-contained HTML page, and mint the access
//! token the pages are stored under.

mod filter;
mod paginate;
mod render;
mod token;

pub use filter::filter_units;
pub use paginate::{paginate, PageBatch, PARAGRAPHS_PER_PAGE};
pub use render::render_page;
pub use token::generate_access_token;

/// Storage key for one rendered page: `{token}/page_{n}.html`, 1-based,
/// no zero-padding. This format is a compatibility contract and must not
/// change.
pub fn page_key(token: &str, page_number: usize) -> String {
    format!("{}/page_{}.html", token, page_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_key_format_is_stable() {
        assert_eq!(page_key("abc123", 1), "abc123/page_1.html");
        assert_eq!(page_key("abc123", 12), "abc123/page_12.html");
    }
}
