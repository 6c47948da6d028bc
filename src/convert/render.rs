//! Page rendering
//!
//! Renders one batch of text units into a self-contained HTML document: a
//! fixed shell (viewport meta + dark-theme stylesheet) wrapped around one
//! content fragment per unit. This is a direct structural transform, not a
//! layout engine: no word-wrap, no style inference, no merging of adjacent
//! units. Unit content is embedded verbatim apart from leading/trailing
//! whitespace trimming.

use super::PageBatch;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {
            margin: 0;
            padding: 0;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
            background-color: #1a1a2e;
            color: #e0e0e0;
        }
        .content-container {
            padding: 0;
        }
        .content-card {
            background-color: #16213e;
            border: 1px solid #0f3460;
            border-radius: 8px;
            overflow: hidden;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
        }
        .card-header {
            padding: 0;
            border-bottom: 1px solid #0f3460;
            background-color: #0f3460;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .card-title {
            font-size: 1.25rem;
            font-weight: 600;
            color: white;
            margin: 0;
        }
        .card-body {
            padding: 1.5rem;
        }
        .paragraph {
            margin-bottom: 1.5rem;
            line-height: 1.6;
        }
        .paragraph p {
            margin: 0;
        }
        a {
            color: #4dabf7;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
    </style>
</head>
<body>
    <div class="content-container">
        <div class="content-card">
            <div class="card-body">"#;

const PAGE_FOOT: &str = r#"
            </div>
        </div>
    </div>
</body>
</html>"#;

/// Render one batch into a complete HTML page document.
pub fn render_page(batch: &PageBatch) -> String {
    let mut html = String::from(PAGE_HEAD);

    for unit in &batch.units {
        html.push_str("\n                <div class=\"paragraph\">\n                    <p>");
        html.push_str(unit.content.trim());
        html.push_str("</p>\n                </div>");
    }

    html.push_str(PAGE_FOOT);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::TextUnit;

    fn batch(contents: &[&str]) -> PageBatch {
        PageBatch {
            page_number: 1,
            units: contents
                .iter()
                .map(|c| TextUnit {
                    content: c.to_string(),
                    source_page: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn wraps_every_unit_in_a_paragraph_fragment() {
        let html = render_page(&batch(&["first paragraph", "second paragraph"]));
        assert_eq!(html.matches("<div class=\"paragraph\">").count(), 2);
        assert!(html.contains("<p>first paragraph</p>"));
        assert!(html.contains("<p>second paragraph</p>"));
    }

    #[test]
    fn emits_units_in_batch_order() {
        let html = render_page(&batch(&["alpha", "beta", "gamma"]));
        let a = html.find("alpha").unwrap();
        let b = html.find("beta").unwrap();
        let g = html.find("gamma").unwrap();
        assert!(a < b && b < g);
    }

    #[test]
    fn trims_but_does_not_escape_content() {
        let html = render_page(&batch(&["  a < b & c > d\n"]));
        assert!(html.contains("<p>a < b & c > d</p>"));
    }

    #[test]
    fn page_is_a_complete_html_document() {
        let html = render_page(&batch(&[]));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
    }
}
