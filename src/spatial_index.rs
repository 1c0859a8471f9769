//! Spatial Index Module
//!
//! R-tree over laid-out appointment rectangles for hit testing and viewport
//! culling. Entries are keyed by paint order, so the topmost hit is simply
//! the candidate with the highest key.

use crate::types::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};

/// A laid-out appointment's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    /// Position in paint order (later paints on top)
    pub paint_order: usize,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(paint_order: usize, rect: &Rect) -> Self {
        Self {
            paint_order,
            min_x: rect.x,
            min_y: rect.y,
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.paint_order == other.paint_order
    }
}

/// Spatial index for laid-out appointments using an R-tree.
/// Provides O(log n) point queries and range queries.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load from rectangles given in paint order.
    pub fn from_rects<'a, I>(rects: I) -> Self
    where
        I: Iterator<Item = &'a Rect>,
    {
        let entries: Vec<SpatialEntry> = rects
            .enumerate()
            .map(|(order, rect)| SpatialEntry::new(order, rect))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Paint order of the topmost entry containing the point.
    pub fn topmost_at(&self, p: Point) -> Option<usize> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([p.x, p.y]))
            .filter(|entry| entry.contains_point(p.x, p.y))
            .map(|entry| entry.paint_order)
            .max()
    }

    /// Paint orders of all entries intersecting the rectangle, ascending.
    pub fn query_rect(&self, rect: &Rect) -> Vec<usize> {
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.right(), rect.bottom()]);

        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.paint_order)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
