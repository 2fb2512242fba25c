//! Grid helpers and boolean occupancy queries

use crate::Vec2;
use std::collections::HashSet;

/// Size of one grid cell in pixels
pub const GRID_SIZE: f64 = 16.0;

/// Convert a grid cell index to a pixel position
pub fn grid_cells(n: i64) -> f64 {
    n as f64 * GRID_SIZE
}

/// Boolean occupancy query over pixel-aligned grid coordinates.
///
/// This is the only collision surface the engine knows about; level data
/// lives behind it.
pub trait SpaceQuery {
    fn is_space_free(&self, x: f64, y: f64) -> bool;
}

/// A set of blocked cells, keyed by rounded pixel coordinates
#[derive(Debug, Default, Clone)]
pub struct WallSet {
    walls: HashSet<(i64, i64)>,
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the cell at pixel position (x, y) as blocked
    pub fn block(&mut self, x: f64, y: f64) {
        self.walls.insert(Self::key(x, y));
    }

    /// Unblock the cell at pixel position (x, y)
    pub fn unblock(&mut self, x: f64, y: f64) {
        self.walls.remove(&Self::key(x, y));
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    fn key(x: f64, y: f64) -> (i64, i64) {
        (x.round() as i64, y.round() as i64)
    }
}

impl SpaceQuery for WallSet {
    fn is_space_free(&self, x: f64, y: f64) -> bool {
        !self.walls.contains(&Self::key(x, y))
    }
}

impl FromIterator<Vec2> for WallSet {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        let mut set = Self::new();
        for v in iter {
            set.block(v.x, v.y);
        }
        set
    }
}
