//! Duck Run - a side-scrolling tile platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, entities, game modes)
//! - `levels`: Built-in tilemaps and bee trigger tables
//! - `tuning`: Data-driven game balance

pub mod levels;
pub mod sim;
pub mod tuning;

pub use levels::{HazardTrigger, Level, LevelError, Tile, TileClass};
pub use tuning::{Tuning, TuningError};

/// World geometry constants (pixels)
pub mod consts {
    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 900.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Side length of one tilemap cell
    pub const TILE_SIZE: f32 = 60.0;
    /// Grass blades on a "1" tile are drawn but not solid
    pub const GRASS_TOP_OFFSET: f32 = 15.0;

    /// Player collision box (one duck frame)
    pub const PLAYER_WIDTH: f32 = 47.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_START_Y: f32 = 365.0;
    /// Frames in the walk cycle
    pub const PLAYER_FRAMES: u32 = 3;

    /// Bee hazard
    pub const BEE_WIDTH: f32 = 50.0;
    pub const BEE_HEIGHT: f32 = 45.0;
    /// Bees appear this far past the right edge of the camera
    pub const BEE_SPAWN_AHEAD: f32 = 50.0;

    /// Egg projectile
    pub const EGG_SIZE: f32 = 10.0;
    pub const EGG_SPAWN_OFFSET_X: f32 = 20.0;
    pub const EGG_SPAWN_OFFSET_Y: f32 = 20.0;
    /// Eggs survive this far outside the camera window
    pub const EGG_OFFSCREEN_MARGIN: f32 = 50.0;

    /// Pickups sit slightly below their tile origin
    pub const PICKUP_SIZE: f32 = 40.0;
    pub const PICKUP_Y_OFFSET: f32 = 10.0;

    /// Only the last few water tiles of a level act as the goal
    pub const GOAL_WATER_TILES: usize = 3;

    /// Decorative menu bobbing per idle tick
    pub const IDLE_BOB_STEP: f32 = 0.1;
}

/// Camera offset for a player x position in a world of the given width.
///
/// Centres the player, clamped to `[0, max(0, world_width - VIEWPORT_WIDTH)]`.
#[inline]
pub fn camera_for(player_x: f32, world_width: f32) -> f32 {
    use consts::VIEWPORT_WIDTH;
    let max_camera = (world_width - VIEWPORT_WIDTH).max(0.0);
    (player_x - VIEWPORT_WIDTH / 2.0).clamp(0.0, max_camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_clamps_to_world() {
        assert_eq!(camera_for(200.0, 5000.0), 0.0);
        assert_eq!(camera_for(1000.0, 5000.0), 550.0);
        assert_eq!(camera_for(4900.0, 5000.0), 4100.0);
        // World narrower than the viewport never scrolls
        assert_eq!(camera_for(700.0, 600.0), 0.0);
    }
}
