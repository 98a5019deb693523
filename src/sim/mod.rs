//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Time only through the clock value passed in by the host
//! - Stable iteration order (scan order for geometry, spawn order for entities)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entities;
pub mod grid;
pub mod mode;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{PlayerStep, VerticalContact, step_player};
pub use grid::TileGrid;
pub use mode::{GameMode, MenuCommand, MenuState};
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use state::{
    Bee, Counters, Egg, Facing, GameEvent, GameState, Pickup, PickupKind, Player,
};
pub use tick::{TickInput, tick};
