//! Paragraph filter
//!
//! Suppresses decorative glyphs, page numbers, and stray whitespace blocks
//! that would otherwise show up as noise paragraphs.

use crate::extract::TextUnit;

/// Minimum number of word characters a block must contain to be kept.
const MIN_WORD_CHARS: usize = 10;

/// Drop units whose content, after stripping every character that is not a
/// letter, digit, or underscore, has fewer than 10 characters left.
/// Order-preserving; an empty input yields an empty output.
pub fn filter_units(units: Vec<TextUnit>) -> Vec<TextUnit> {
    units
        .into_iter()
        .filter(|unit| word_char_count(&unit.content) >= MIN_WORD_CHARS)
        .collect()
}

fn word_char_count(text: &str) -> usize {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(content: &str) -> TextUnit {
        TextUnit {
            content: content.to_string(),
            source_page: 1,
        }
    }

    #[test]
    fn drops_nine_word_chars_keeps_ten() {
        let kept = filter_units(vec![unit("123456789"), unit("1234567890")]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].content, "1234567890");
    }

    #[test]
    fn punctuation_and_whitespace_do_not_count() {
        // 9 letters padded with punctuation is still below the threshold.
        let kept = filter_units(vec![unit("a-b-c-d-e-f-g-h-i !!! ...")]);
        assert!(kept.is_empty());
    }

    #[test]
    fn underscores_count_as_word_chars() {
        let kept = filter_units(vec![unit("__________")]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn drops_whitespace_only_blocks() {
        let kept = filter_units(vec![unit("   \n\t  "), unit("")]);
        assert!(kept.is_empty());
    }

    #[test]
    fn preserves_order() {
        let kept = filter_units(vec![
            unit("first paragraph of text"),
            unit("-- 3 --"),
            unit("second paragraph of text"),
        ]);
        let contents: Vec<&str> = kept.iter().map(|u| u.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["first paragraph of text", "second paragraph of text"]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_units(Vec::new()).is_empty());
    }
}
