//! Paginator
//!
//! Groups the filtered unit sequence into fixed-size batches, one batch per
//! rendered page.

use crate::extract::TextUnit;

/// Number of text units rendered onto one HTML page.
pub const PARAGRAPHS_PER_PAGE: usize = 80;

/// A contiguous, order-preserving slice of at most [`PARAGRAPHS_PER_PAGE`]
/// units, destined for one page artifact.
#[derive(Debug, Clone)]
pub struct PageBatch {
    /// 1-based page number, contiguous from 1.
    pub page_number: usize,
    pub units: Vec<TextUnit>,
}

/// Split `units` into batches of [`PARAGRAPHS_PER_PAGE`]. The batch count
/// is `ceil(len / 80)`; an empty input produces zero batches.
pub fn paginate(units: Vec<TextUnit>) -> Vec<PageBatch> {
    units
        .chunks(PARAGRAPHS_PER_PAGE)
        .enumerate()
        .map(|(idx, chunk)| PageBatch {
            page_number: idx + 1,
            units: chunk.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: usize) -> Vec<TextUnit> {
        (0..n)
            .map(|i| TextUnit {
                content: format!("paragraph number {}", i),
                source_page: 1,
            })
            .collect()
    }

    #[test]
    fn empty_input_yields_zero_batches() {
        assert!(paginate(Vec::new()).is_empty());
    }

    #[test]
    fn exactly_one_page_at_the_boundary() {
        let batches = paginate(units(80));
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].units.len(), 80);
    }

    #[test]
    fn one_unit_over_the_boundary_spills_to_a_second_page() {
        let batches = paginate(units(81));
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].units.len(), 80);
        assert_eq!(batches[1].units.len(), 1);
        assert_eq!(batches[1].units[0].content, "paragraph number 80");
    }

    #[test]
    fn page_numbers_are_one_based_and_contiguous() {
        let batches = paginate(units(200));
        let numbers: Vec<usize> = batches.iter().map(|b| b.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn batches_preserve_unit_order() {
        let batches = paginate(units(85));
        assert_eq!(batches[0].units[0].content, "paragraph number 0");
        assert_eq!(batches[0].units[79].content, "paragraph number 79");
        assert_eq!(batches[1].units[4].content, "paragraph number 84");
    }
}
