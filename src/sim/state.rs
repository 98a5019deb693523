//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned [`GameState`];
//! there are no globals, so a state plus a sequence of inputs and clock
//! readings always replays identically.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::{TileGrid, tile_cell};
use super::mode::{GameMode, MenuState};
use super::rect::Rect;
use crate::camera_for;
use crate::consts::*;
use crate::levels::{self, HazardTrigger, Level, LevelError, TileClass};
use crate::tuning::Tuning;

/// Which way the duck is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player-controlled duck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the collision box
    pub pos: Vec2,
    /// Vertical speed, positive is falling
    pub velocity: f32,
    /// Current horizontal speed (doubled while boosted)
    pub speed: f32,
    pub facing: Facing,
    pub jumps_remaining: u8,
    pub boost_active: bool,
    /// Clock time (seconds) at which the boost wears off
    pub boost_until: f64,
    /// Clock time of the last jump
    pub last_jump_at: Option<f64>,
    pub lives: u8,
    /// Walk-cycle frame index
    pub frame: u32,
    pub frame_timer: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            velocity: 0.0,
            speed: tuning.base_speed,
            facing: Facing::Right,
            jumps_remaining: tuning.max_jumps,
            boost_active: false,
            boost_until: 0.0,
            last_jump_at: None,
            lives: tuning.starting_lives,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Collision box
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }
}

/// A bee drifting left across the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bee {
    pub id: u32,
    pub pos: Vec2,
}

impl Bee {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::new(BEE_WIDTH, BEE_HEIGHT))
    }
}

/// An egg thrown by the duck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Egg {
    pub id: u32,
    pub pos: Vec2,
    /// Signed horizontal speed per tick
    pub vel_x: f32,
}

impl Egg {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(EGG_SIZE))
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Toast,
    Cookie,
    /// Temporarily doubles the duck's speed
    Chocolate,
}

/// A static collectible placed from the tilemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    pub rect: Rect,
}

/// Per-type collection tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub toast: u32,
    pub cookie: u32,
    pub chocolate: u32,
}

impl Counters {
    pub fn record(&mut self, kind: PickupKind) {
        match kind {
            PickupKind::Toast => self.toast += 1,
            PickupKind::Cookie => self.cookie += 1,
            PickupKind::Chocolate => self.chocolate += 1,
        }
    }
}

/// Discrete happenings for audio and UI hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PickupCollected(PickupKind),
    /// A bee stung the duck
    PlayerHurt,
    EggFired,
    /// An egg knocked a bee out
    BeeSwatted,
    Won,
    Lost,
}

impl GameEvent {
    /// Stable name used to key sounds
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PickupCollected(_) => "pickup",
            GameEvent::PlayerHurt => "hurt",
            GameEvent::EggFired => "egg",
            GameEvent::BeeSwatted => "swat",
            GameEvent::Won => "win",
            GameEvent::Lost => "lost",
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub mode: GameMode,
    pub menu: MenuState,
    /// Active level and its derived geometry
    pub level: Level,
    pub grid: TileGrid,
    pub triggers: Vec<HazardTrigger>,
    /// Trigger x thresholds that already spawned a bee this session
    pub fired_triggers: BTreeSet<u32>,
    pub player: Player,
    pub bees: Vec<Bee>,
    pub eggs: Vec<Egg>,
    pub pickups: Vec<Pickup>,
    pub counters: Counters,
    /// Ticks spent in the win sequence
    pub swim_timer: u32,
    /// Decorative bobbing phase for menu screens
    pub bob_phase: f32,
    /// Any bee inside the camera window after the last tick
    pub bee_on_screen: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Host clock (seconds) seen by the most recent tick
    pub clock: f64,
    /// Host clock at the first Playing tick of this run
    pub started_at: Option<f64>,
    /// Events since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh state on the home screen with no level loaded
    pub fn new(tuning: Tuning) -> Self {
        Self {
            player: Player::new(&tuning),
            tuning,
            mode: GameMode::Home,
            menu: MenuState::default(),
            level: Level::default(),
            grid: TileGrid::default(),
            triggers: Vec::new(),
            fired_triggers: BTreeSet::new(),
            bees: Vec::new(),
            eggs: Vec::new(),
            pickups: Vec::new(),
            counters: Counters::default(),
            swim_timer: 0,
            bob_phase: 0.0,
            bee_on_screen: false,
            time_ticks: 0,
            clock: 0.0,
            started_at: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start (or restart) a level in Playing mode.
    ///
    /// Resets the player, every entity collection, the counters and the
    /// fired-trigger set, so nothing carries over between attempts.
    pub fn init_game(&mut self, level_id: u8) -> Result<(), LevelError> {
        let level = levels::get_level(level_id)?;
        let triggers = levels::hazard_table(level_id)?;

        self.grid = TileGrid::from_level(&level);
        self.triggers = triggers.to_vec();
        self.fired_triggers.clear();
        self.player = Player::new(&self.tuning);
        self.bees.clear();
        self.eggs.clear();
        self.pickups.clear();
        self.counters = Counters::default();
        self.swim_timer = 0;
        self.bee_on_screen = false;
        self.started_at = None;

        for (row, col, tile) in level.cells() {
            if let TileClass::Pickup(kind) = tile.class() {
                let cell = tile_cell(row, col);
                let id = self.next_entity_id();
                self.pickups.push(Pickup {
                    id,
                    kind,
                    rect: Rect::new(
                        cell.left(),
                        cell.top() + PICKUP_Y_OFFSET,
                        PICKUP_SIZE,
                        PICKUP_SIZE,
                    ),
                });
            }
        }

        log::info!(
            "Level {} started: {} pickups, {} bee triggers",
            level_id,
            self.pickups.len(),
            self.triggers.len()
        );
        self.level = level;
        self.menu.selected_level = level_id;
        self.menu.last_tap = None;
        // A level start is a hard reset and may begin from any mode
        log::debug!("Mode {:?} -> Playing (level start)", self.mode);
        self.mode = GameMode::Playing;
        Ok(())
    }

    /// Camera x offset, derived from the player every time it is asked for
    pub fn camera_x(&self) -> f32 {
        camera_for(self.player.pos.x, self.level.width_px())
    }

    /// Whole seconds since the run started, 0 before its first tick
    pub fn elapsed_secs(&self) -> u32 {
        self.started_at.map_or(0, |start| (self.clock - start).max(0.0).floor() as u32)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        log::trace!("event: {}", event.name());
        self.events.push(event);
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_game_resets_session() {
        let mut state = GameState::default();
        state.init_game(1).unwrap();

        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.counters, Counters::default());
        assert_eq!(state.camera_x(), 0.0);
        assert_eq!(state.player.pos, Vec2::new(200.0, 365.0));
        assert_eq!(state.player.jumps_remaining, 2);
    }

    #[test]
    fn restart_does_not_leak_state() {
        let mut state = GameState::default();
        state.init_game(2).unwrap();
        let pickups = state.pickups.len();

        state.player.lives = 1;
        state.player.pos.x = 3000.0;
        state.counters.record(PickupKind::Cookie);
        state.pickups.pop();
        state.fired_triggers.insert(500);
        state.bees.push(Bee {
            id: 999,
            pos: Vec2::ZERO,
        });
        state.eggs.push(Egg {
            id: 998,
            pos: Vec2::ZERO,
            vel_x: 8.0,
        });

        state.init_game(2).unwrap();
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.player.pos.x, 200.0);
        assert_eq!(state.counters.cookie, 0);
        assert_eq!(state.pickups.len(), pickups);
        assert!(state.fired_triggers.is_empty());
        assert!(state.bees.is_empty());
        assert!(state.eggs.is_empty());
    }

    #[test]
    fn pickups_placed_from_tiles() {
        let mut state = GameState::default();
        state.init_game(1).unwrap();
        let level = levels::get_level(1).unwrap();
        let expected = level
            .cells()
            .filter(|&(_, _, t)| matches!(t.class(), TileClass::Pickup(_)))
            .count();
        assert_eq!(state.pickups.len(), expected);

        // Level 1 row 2 col 34 is a chocolate
        let choco = state
            .pickups
            .iter()
            .find(|p| p.kind == PickupKind::Chocolate)
            .unwrap();
        assert_eq!(choco.rect, Rect::new(34.0 * 60.0, 120.0 + 10.0, 40.0, 40.0));
    }

    #[test]
    fn unknown_level_leaves_state_alone() {
        let mut state = GameState::default();
        assert_eq!(state.init_game(9), Err(LevelError::UnknownLevel(9)));
        assert_eq!(state.mode, GameMode::Home);
    }

    #[test]
    fn event_names() {
        let mut state = GameState::default();
        state.push_event(GameEvent::PickupCollected(PickupKind::Toast));
        state.push_event(GameEvent::PlayerHurt);
        state.push_event(GameEvent::Won);
        let names: Vec<_> = state.drain_events().iter().map(GameEvent::name).collect();
        assert_eq!(names, ["pickup", "hurt", "win"]);
        assert!(state.events.is_empty());
    }
}
