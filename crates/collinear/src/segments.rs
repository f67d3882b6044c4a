//! Append-only ordered collection of discovered segments.
//!
//! Duplicate suppression is the finders' job (anchor rule / quadruple
//! ordering); this container keeps insertion order and nothing else.

use crate::geom::LineSegment;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentList {
    items: Vec<LineSegment>,
}

impl SegmentList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, segment: LineSegment) {
        self.items.push(segment);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[LineSegment] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LineSegment> {
        self.items.iter()
    }

    /// Materialized copy in insertion order.
    #[inline]
    pub fn to_vec(&self) -> Vec<LineSegment> {
        self.items.clone()
    }
}

impl<'a> IntoIterator for &'a SegmentList {
    type Item = &'a LineSegment;
    type IntoIter = std::slice::Iter<'a, LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Extend<LineSegment> for SegmentList {
    fn extend<I: IntoIterator<Item = LineSegment>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
