//! Top-level game modes and menu navigation
//!
//! Modes change only in response to discrete menu commands, the pause
//! input, or terminal conditions detected during a playing tick.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use crate::levels::LEVEL_COUNT;

/// Which screen/subsystem is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Home,
    LevelSelect,
    /// Controls explainer shown before level 1
    Tutorial,
    Playing,
    Paused,
    Lost,
    /// Reached the goal water; swims off and returns to level select
    Won,
}

impl GameMode {
    /// Legal transitions, excluding `init_game` which may start play from anywhere
    pub fn can_transition_to(self, next: GameMode) -> bool {
        use GameMode::*;
        matches!(
            (self, next),
            (Home, LevelSelect)
                | (LevelSelect, Tutorial | Playing)
                | (Tutorial, Playing)
                | (Playing, Paused | Lost | Won)
                | (Paused, Playing | LevelSelect | Home)
                | (Lost, Playing | Home | LevelSelect)
                | (Won, LevelSelect)
        )
    }

    /// True while the duck is in the world (drawn by the renderer)
    pub fn shows_world(self) -> bool {
        matches!(self, GameMode::Playing | GameMode::Paused | GameMode::Won)
    }
}

/// Pause menu entries
pub const PAUSE_OPTIONS: [&str; 4] = ["Continue", "Re-Play", "Change Level", "Exit to Home"];
/// Game-over menu entries
pub const LOSE_OPTIONS: [&str; 3] = ["Play Again", "Exit to Home", "Change Level"];

/// A discrete menu input (key press or tap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCommand {
    Up,
    Down,
    Confirm,
    /// Escape
    Back,
    /// Tap on an option: a level number on level select, otherwise a menu index
    Tap(u8),
}

/// Menu cursors and tap tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuState {
    /// 1-based level id
    pub selected_level: u8,
    pub lose_option: u8,
    pub pause_option: u8,
    /// Last tapped option and when, for double-tap detection
    pub last_tap: Option<(u8, f64)>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            selected_level: 1,
            lose_option: 0,
            pause_option: 0,
            last_tap: None,
        }
    }
}

fn wrap_prev(option: u8, count: usize) -> u8 {
    let count = count as u8;
    (option + count - 1) % count
}

fn wrap_next(option: u8, count: usize) -> u8 {
    (option + 1) % count as u8
}

impl GameState {
    /// Switch modes through a legal transition
    pub(crate) fn set_mode(&mut self, next: GameMode) {
        debug_assert!(
            self.mode == next || self.mode.can_transition_to(next),
            "illegal mode transition {:?} -> {:?}",
            self.mode,
            next
        );
        log::debug!("Mode {:?} -> {:?}", self.mode, next);
        match next {
            GameMode::Paused => self.menu.pause_option = 0,
            GameMode::Lost => self.menu.lose_option = 0,
            _ => {}
        }
        self.menu.last_tap = None;
        self.mode = next;
    }

    /// End the current run with `outcome` (Won or Lost).
    ///
    /// Only the first terminal condition of a playing session counts;
    /// returns false if play had already ended.
    pub(crate) fn finish_run(&mut self, outcome: GameMode) -> bool {
        debug_assert!(matches!(outcome, GameMode::Won | GameMode::Lost));
        if self.mode != GameMode::Playing {
            return false;
        }
        self.set_mode(outcome);
        match outcome {
            GameMode::Won => {
                self.swim_timer = 0;
                log::info!("Level {} cleared", self.level.id);
                self.push_event(GameEvent::Won);
            }
            _ => {
                log::info!("Level {} lost with {} lives", self.level.id, self.player.lives);
                self.push_event(GameEvent::Lost);
            }
        }
        true
    }

    /// Apply a menu command. `now` is the host clock in seconds.
    pub fn handle_menu(&mut self, command: MenuCommand, now: f64) {
        match self.mode {
            GameMode::Home => {
                if matches!(command, MenuCommand::Confirm | MenuCommand::Tap(_)) {
                    self.set_mode(GameMode::LevelSelect);
                }
            }
            GameMode::LevelSelect => match command {
                MenuCommand::Up => {
                    self.menu.selected_level = self.menu.selected_level.saturating_sub(1).max(1);
                }
                MenuCommand::Down => {
                    self.menu.selected_level = (self.menu.selected_level + 1).min(LEVEL_COUNT);
                }
                MenuCommand::Confirm => self.start_selected_level(),
                MenuCommand::Tap(level) if (1..=LEVEL_COUNT).contains(&level) => {
                    if self.is_double_tap(level, now) {
                        self.start_selected_level();
                    } else {
                        self.menu.selected_level = level;
                    }
                }
                _ => {}
            },
            GameMode::Tutorial => {
                if matches!(command, MenuCommand::Confirm | MenuCommand::Tap(_)) {
                    self.restart_level();
                }
            }
            GameMode::Playing => {
                if command == MenuCommand::Back {
                    self.set_mode(GameMode::Paused);
                }
            }
            GameMode::Paused => match command {
                MenuCommand::Up => {
                    self.menu.pause_option = wrap_prev(self.menu.pause_option, PAUSE_OPTIONS.len());
                }
                MenuCommand::Down => {
                    self.menu.pause_option = wrap_next(self.menu.pause_option, PAUSE_OPTIONS.len());
                }
                MenuCommand::Confirm => self.pause_action(self.menu.pause_option),
                MenuCommand::Tap(option) if (option as usize) < PAUSE_OPTIONS.len() => {
                    self.menu.pause_option = option;
                    self.pause_action(option);
                }
                MenuCommand::Back => self.set_mode(GameMode::Playing),
                _ => {}
            },
            GameMode::Lost => match command {
                MenuCommand::Up => {
                    self.menu.lose_option = wrap_prev(self.menu.lose_option, LOSE_OPTIONS.len());
                }
                MenuCommand::Down => {
                    self.menu.lose_option = wrap_next(self.menu.lose_option, LOSE_OPTIONS.len());
                }
                MenuCommand::Confirm => self.lose_action(self.menu.lose_option),
                MenuCommand::Tap(option) if (option as usize) < LOSE_OPTIONS.len() => {
                    if self.is_double_tap(option, now) {
                        self.lose_action(option);
                    } else {
                        self.menu.lose_option = option;
                    }
                }
                _ => {}
            },
            // The win sequence runs on its own timer
            GameMode::Won => {}
        }
    }

    /// Records the tap and reports whether it completes a double tap on
    /// the currently selected option
    fn is_double_tap(&mut self, option: u8, now: f64) -> bool {
        let selected = match self.mode {
            GameMode::LevelSelect => self.menu.selected_level,
            _ => self.menu.lose_option,
        };
        let double = selected == option
            && matches!(self.menu.last_tap, Some((last, at))
                if last == option && now - at < self.tuning.double_tap_secs);
        self.menu.last_tap = if double { None } else { Some((option, now)) };
        double
    }

    fn start_selected_level(&mut self) {
        if self.menu.selected_level == 1 {
            self.set_mode(GameMode::Tutorial);
        } else {
            self.restart_level();
        }
    }

    /// Re-run `init_game` for the selected level
    fn restart_level(&mut self) {
        let level = self.menu.selected_level;
        if let Err(err) = self.init_game(level) {
            log::error!("Cannot start level: {err}");
        }
    }

    fn pause_action(&mut self, option: u8) {
        match option {
            0 => self.set_mode(GameMode::Playing),
            1 => self.restart_level(),
            2 => self.set_mode(GameMode::LevelSelect),
            _ => self.set_mode(GameMode::Home),
        }
    }

    fn lose_action(&mut self, option: u8) {
        match option {
            0 => self.restart_level(),
            1 => self.set_mode(GameMode::Home),
            _ => self.set_mode(GameMode::LevelSelect),
        }
    }
}
