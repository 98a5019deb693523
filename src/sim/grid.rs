//! Collision geometry derived from a tilemap
//!
//! Tile (row, col) maps to the world cell at (col * TILE, row * TILE).
//! Grass-top tiles lose a lip off the top of their collider so the drawn
//! grass blades never block the duck.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{GOAL_WATER_TILES, GRASS_TOP_OFFSET, TILE_SIZE};
use crate::levels::{Level, TileClass};

/// Solid and water rectangles for one level, in row-major scan order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    pub solids: Vec<Rect>,
    pub waters: Vec<Rect>,
}

/// World-space cell of a tile
pub fn tile_cell(row: usize, col: usize) -> Rect {
    Rect::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE, TILE_SIZE, TILE_SIZE)
}

impl TileGrid {
    /// Derive collision geometry for a level
    pub fn from_level(level: &Level) -> Self {
        let mut grid = Self::default();
        for (row, col, tile) in level.cells() {
            let cell = tile_cell(row, col);
            match tile.class() {
                TileClass::SolidTop => grid.solids.push(Rect::new(
                    cell.left(),
                    cell.top() + GRASS_TOP_OFFSET,
                    TILE_SIZE,
                    TILE_SIZE - GRASS_TOP_OFFSET,
                )),
                TileClass::SolidFull => grid.solids.push(cell),
                TileClass::Water => grid.waters.push(cell),
                TileClass::Pickup(_) | TileClass::Empty => {}
            }
        }
        log::trace!(
            "Level {} geometry: {} solids, {} waters",
            level.id,
            grid.solids.len(),
            grid.waters.len()
        );
        grid
    }

    /// The water tiles that finish the level: the last few in scan order.
    /// Earlier water is just a pond.
    pub fn goal_waters(&self) -> &[Rect] {
        let start = self.waters.len().saturating_sub(GOAL_WATER_TILES);
        &self.waters[start..]
    }

    /// First solid rectangle overlapping `rect`, if any
    pub fn first_solid_hit(&self, rect: &Rect) -> Option<&Rect> {
        self.solids.iter().find(|solid| solid.overlaps(rect))
    }
}
