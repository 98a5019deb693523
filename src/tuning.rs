//! Data-driven game balance
//!
//! Every field has a default matching the shipped feel of the game, so a
//! tuning file only needs to list the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gameplay constants (per-tick units unless noted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Added to vertical velocity every playing tick
    pub gravity: f32,
    /// Horizontal pixels per tick without a boost
    pub base_speed: f32,
    /// Speed multiplier while a chocolate boost is active
    pub boost_multiplier: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_power: f32,
    pub boost_jump_power: f32,
    /// Jumps available between landings
    pub max_jumps: u8,
    /// Minimum seconds between jumps (0 disables the gate)
    pub jump_cooldown_secs: f64,
    pub starting_lives: u8,
    /// Walk-cycle frame timer increment
    pub animation_speed: f32,

    // === Pickups ===
    /// Seconds a chocolate boost lasts
    pub boost_duration_secs: f64,

    // === Hazards and projectiles ===
    pub bee_speed: f32,
    pub egg_speed: f32,

    // === Win sequence (ticks) ===
    /// Ticks the duck floats in place after reaching the goal
    pub win_hold_ticks: u32,
    /// Ticks after which the game returns to level select
    pub win_exit_ticks: u32,
    pub win_swim_speed: f32,

    // === Menus ===
    /// Max seconds between two taps to count as a double tap
    pub double_tap_secs: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.9,
            base_speed: 6.0,
            boost_multiplier: 2.0,
            jump_power: -15.0,
            boost_jump_power: -20.0,
            max_jumps: 2,
            jump_cooldown_secs: 0.0,
            starting_lives: 3,
            animation_speed: 0.2,

            boost_duration_secs: 7.0,

            bee_speed: 3.0,
            egg_speed: 8.0,

            win_hold_ticks: 60,
            win_exit_ticks: 120,
            win_swim_speed: 4.0,

            double_tap_secs: 0.3,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys cannot fail to serialize
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Player speed while boosted
    pub fn boosted_speed(&self) -> f32 {
        self.base_speed * self.boost_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.2, "starting_lives": 5 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.starting_lives, 5);
        assert_eq!(tuning.base_speed, 6.0);
        assert_eq!(tuning.boost_duration_secs, 7.0);
    }

    #[test]
    fn json_round_trip() {
        let tuning = Tuning::default();
        assert_eq!(Tuning::from_json(&tuning.to_json()).unwrap(), tuning);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            Tuning::from_json("{ gravity: "),
            Err(TuningError::Parse(_))
        ));
        assert!(matches!(
            Tuning::load("/nonexistent/tuning.json"),
            Err(TuningError::Io(_))
        ));
    }

    #[test]
    fn boost_doubles_speed() {
        assert_eq!(Tuning::default().boosted_speed(), 12.0);
    }
}
