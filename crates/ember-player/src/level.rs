//! Demo level data

use ember_core::{grid_cells, WallSet};

/// Walls for the demo map: a short fence to the hero's left and a stray
/// crate above the rod path.
pub fn demo_walls() -> WallSet {
    let mut walls = WallSet::new();
    walls.block(grid_cells(4), grid_cells(5));
    walls.block(grid_cells(4), grid_cells(6));
    walls.block(grid_cells(6), grid_cells(4));
    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::SpaceQuery;

    #[test]
    fn fence_cells_are_blocked() {
        let walls = demo_walls();
        assert!(!walls.is_space_free(grid_cells(4), grid_cells(5)));
        assert!(walls.is_space_free(grid_cells(5), grid_cells(5)));
    }
}
