//! Array elements for the sorting visualizations

/// One element of a sorting dataset.
///
/// `id` is a stable identity that is independent of the element's position,
/// so the UI can track an element across swaps.  Within one dataset ids are
/// unique; values may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub value: i32,
    pub id: u32,
    /// Whether the element is known to be in its final sorted position.
    pub is_sorted: bool,
    /// Whether the element is the current pivot (partitioning sorts).
    pub is_pivot: bool,
    /// Recursion depth of the sub-range the element belongs to
    /// (divide-and-conquer sorts).
    pub depth: usize,
}

impl Element {
    pub fn new(value: i32, id: u32) -> Self {
        Element {
            value,
            id,
            is_sorted: false,
            is_pivot: false,
            depth: 0,
        }
    }
}

/// Build a dataset from raw values, assigning sequential ids.
pub fn make_elements(values: &[i32]) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Element::new(v, i as u32))
        .collect()
}
