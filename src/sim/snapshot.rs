//! Read-only view handed to the renderer each frame

use serde::Serialize;

use super::mode::{GameMode, MenuState};
use super::state::{Bee, Counters, Egg, Facing, GameState, Pickup};
use glam::Vec2;

/// Everything a renderer or HUD needs, borrowed from the state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub mode: GameMode,
    /// False on menu screens that hide the level
    pub shows_world: bool,
    pub menu: &'a MenuState,
    pub level: u8,
    pub player_pos: Vec2,
    pub facing: Facing,
    pub frame: u32,
    pub swimming: bool,
    pub boost_active: bool,
    pub lives: u8,
    pub camera_x: f32,
    pub counters: Counters,
    /// Whole seconds since the run started
    pub elapsed_secs: u32,
    pub bees: &'a [Bee],
    pub eggs: &'a [Egg],
    pub pickups: &'a [Pickup],
    /// Lets an audio host loop the buzz while bees are visible
    pub bee_on_screen: bool,
    pub bob_phase: f32,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            shows_world: self.mode.shows_world(),
            menu: &self.menu,
            level: self.level.id,
            player_pos: self.player.pos,
            facing: self.player.facing,
            frame: self.player.frame,
            swimming: self.mode == GameMode::Won,
            boost_active: self.player.boost_active,
            lives: self.player.lives,
            camera_x: self.camera_x(),
            counters: self.counters,
            elapsed_secs: self.elapsed_secs(),
            bees: &self.bees,
            eggs: &self.eggs,
            pickups: &self.pickups,
            bee_on_screen: self.bee_on_screen,
            bob_phase: self.bob_phase,
        }
    }
}
