use crate::core::pbrt::*;

/// Where a node's items were split: items `begin..pivot` go to the left
/// child, `pivot..end` to the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub pivot: usize,
    pub axis: usize,
}

/// Drives the split decisions of [`super::Builder`].
///
/// A partitioner owns a permutation of the item indices. Positions passed
/// to it always refer to that permutation, and `partition` may only
/// reorder entries inside the range it is given.
pub trait Partitioner {
    /// Bounds of the items at positions `begin..end`.
    fn compute_bbox(&self, begin: usize, end: usize) -> Bounds3f;

    /// Splits the items at positions `begin..end`, or returns `None` if they
    /// should form a leaf. A returned pivot lies strictly inside the range.
    fn partition(&mut self, begin: usize, end: usize, bbox: &Bounds3f) -> Option<Split>;

    /// Final permutation: position `p` of the built tree holds original item
    /// `ordering[p]`.
    fn get_item_ordering(&self) -> &[usize];
}
