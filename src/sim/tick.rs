//! Per-frame simulation tick
//!
//! Physics advances exactly one fixed step per call. The host throttles
//! how often it calls [`tick`] instead of scaling by elapsed time.

use super::collision::step_player;
use super::mode::GameMode;
use super::state::GameState;
use crate::consts::{IDLE_BOB_STEP, PLAYER_FRAMES};

/// Input sampled by the host once per tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held: walk left
    pub left: bool,
    /// Held: walk right
    pub right: bool,
    /// Held: jump (and double jump at the apex)
    pub jump: bool,
    /// Pressed this tick: throw an egg
    pub shoot: bool,
    /// Pressed this tick: pause toggle
    pub pause: bool,
}

/// Advance the game by one step. `now` is the host clock in seconds, used
/// for boost deadlines, jump cooldown and the run timer.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    state.time_ticks += 1;
    state.clock = now;

    if input.pause {
        match state.mode {
            GameMode::Playing => {
                state.set_mode(GameMode::Paused);
                return;
            }
            GameMode::Paused => {
                state.set_mode(GameMode::Playing);
                return;
            }
            _ => {}
        }
    }

    match state.mode {
        GameMode::Won => advance_win_sequence(state),
        GameMode::Playing => play(state, input, now),
        _ => state.bob_phase += IDLE_BOB_STEP,
    }
}

/// Duck floats in the goal, then swims off to the right
fn advance_win_sequence(state: &mut GameState) {
    state.swim_timer += 1;
    if state.swim_timer >= state.tuning.win_hold_ticks {
        state.player.pos.x += state.tuning.win_swim_speed;
    }
    if state.swim_timer > state.tuning.win_exit_ticks {
        state.set_mode(GameMode::LevelSelect);
    }
}

fn play(state: &mut GameState, input: &TickInput, now: f64) {
    state.started_at.get_or_insert(now);

    if input.shoot {
        state.fire_egg();
    }

    let step = step_player(&mut state.player, &state.grid, &state.tuning, input, now);
    if step.fell_out {
        state.finish_run(GameMode::Lost);
    }
    if step.reached_goal {
        state.finish_run(GameMode::Won);
    }

    // Fixed order: bees spawned now can sting now, and pickups still
    // count on the tick a sting happens
    state.spawn_bees();
    state.update_bees();
    state.update_eggs();
    state.collect_pickups(now);

    let player = &mut state.player;
    player.frame_timer += state.tuning.animation_speed;
    if step.moving && player.frame_timer >= 1.0 {
        player.frame_timer = 0.0;
        player.frame = (player.frame + 1) % PLAYER_FRAMES;
    }

    log::trace!(
        "tick {}: player ({:.1}, {:.1}) v={:.1} camera={:.1}",
        state.time_ticks,
        state.player.pos.x,
        state.player.pos.y,
        state.player.velocity,
        state.camera_x()
    );
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Bee, GameEvent, Pickup, PickupKind};

    /// Host frame interval at 80 FPS
    const FRAME: f64 = 1.0 / 80.0;

    fn playing(level: u8) -> GameState {
        let mut state = GameState::default();
        state.init_game(level).unwrap();
        state
    }

    fn count(events: &[GameEvent], wanted: GameEvent) -> usize {
        events.iter().filter(|e| **e == wanted).count()
    }

    #[test]
    fn init_game_round_trip() {
        for level in 1..=5 {
            let state = playing(level);
            assert_eq!(state.player.lives, 3);
            assert_eq!(state.counters.toast, 0);
            assert_eq!(state.counters.cookie, 0);
            assert_eq!(state.counters.chocolate, 0);
            assert_eq!(state.camera_x(), 0.0);
            assert_eq!(state.player.pos, Vec2::new(200.0, 365.0));
        }
    }

    #[test]
    fn settles_onto_start_platform() {
        let mut state = playing(1);
        for i in 0..30 {
            tick(&mut state, &TickInput::default(), i as f64 * FRAME);
        }
        // Level 1 row 7 is grass: solid from y = 435
        assert_eq!(state.player.pos.y, 375.0);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn walking_into_pit_loses_exactly_once() {
        let mut state = playing(5);
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        let mut events = Vec::new();
        for i in 0..600 {
            tick(&mut state, &right, i as f64 * FRAME);
            events.extend(state.drain_events());
        }
        assert_eq!(state.mode, GameMode::Lost);
        assert_eq!(count(&events, GameEvent::Lost), 1);
        assert_eq!(count(&events, GameEvent::PlayerHurt), 0);
        // Fell between the pit walls at x = 1980..2220
        assert!(state.player.pos.x > 1980.0 && state.player.pos.x < 2220.0);
    }

    #[test]
    fn chocolate_boost_lasts_seven_seconds() {
        let mut state = playing(1);
        state.pickups = vec![Pickup {
            id: 500,
            kind: PickupKind::Chocolate,
            rect: Rect::new(200.0, 370.0, 40.0, 40.0),
        }];

        let t = 50.0;
        tick(&mut state, &TickInput::default(), t);
        assert_eq!(state.player.speed, 12.0);
        assert_eq!(state.counters.chocolate, 1);

        tick(&mut state, &TickInput::default(), t + 6.9);
        assert_eq!(state.player.speed, 12.0);

        tick(&mut state, &TickInput::default(), t + 7.0);
        assert_eq!(state.player.speed, 6.0);
        assert!(!state.player.boost_active);
    }

    #[test]
    fn pond_water_is_not_the_goal() {
        let mut state = playing(1);
        let pond = state.grid.waters[0];
        assert!(!state.grid.goal_waters().contains(&pond));

        state.player.pos = Vec2::new(pond.left() + 3.0, 415.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert!(state.player.rect().overlaps(&pond));
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn goal_water_wins_then_returns_to_level_select() {
        let mut state = playing(1);
        let goal = state.grid.goal_waters()[0];
        state.player.pos = Vec2::new(goal.left() + 3.0, 415.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.mode, GameMode::Won);
        assert_eq!(count(&state.drain_events(), GameEvent::Won), 1);

        let start_x = state.player.pos.x;
        for _ in 0..59 {
            tick(&mut state, &TickInput::default(), 0.0);
        }
        assert_eq!(state.player.pos.x, start_x);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.player.pos.x, start_x + 4.0);

        for _ in 60..120 {
            tick(&mut state, &TickInput::default(), 0.0);
        }
        assert_eq!(state.mode, GameMode::Won);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.mode, GameMode::LevelSelect);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn pause_freezes_play() {
        let mut state = playing(2);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, 0.0);
        assert_eq!(state.mode, GameMode::Paused);

        let pos = state.player.pos;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &right, 0.0);
        }
        assert_eq!(state.player.pos, pos);
        assert!(state.bob_phase > 0.9);

        tick(&mut state, &pause, 0.0);
        assert_eq!(state.mode, GameMode::Playing);
        tick(&mut state, &right, 0.0);
        assert_eq!(state.player.pos.x, pos.x + 6.0);
    }

    #[test]
    fn shoot_throws_egg() {
        let mut state = playing(1);
        let shoot = TickInput {
            shoot: true,
            ..Default::default()
        };
        tick(&mut state, &shoot, 0.0);
        assert_eq!(state.eggs.len(), 1);
        // Spawned at the pre-move position and advanced once
        assert_eq!(state.eggs[0].pos.x, 200.0 + 20.0 + 8.0);
        assert_eq!(count(&state.drain_events(), GameEvent::EggFired), 1);
    }

    #[test]
    fn sting_and_pickup_in_same_tick_both_count() {
        let mut state = playing(1);
        let pos = state.player.pos;
        state.bees.push(Bee {
            id: 900,
            pos: Vec2::new(pos.x + 20.0, pos.y),
        });
        state.pickups = vec![Pickup {
            id: 901,
            kind: PickupKind::Toast,
            rect: Rect::new(pos.x, pos.y + 5.0, 40.0, 40.0),
        }];
        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.player.lives, 2);
        assert_eq!(state.counters.toast, 1);
        let events = state.drain_events();
        assert_eq!(count(&events, GameEvent::PlayerHurt), 1);
        assert_eq!(count(&events, GameEvent::PickupCollected(PickupKind::Toast)), 1);
    }

    #[test]
    fn walk_cycle_advances_only_while_moving() {
        let mut state = playing(1);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 0.0);
        }
        assert_eq!(state.player.frame, 0);

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..8 {
            tick(&mut state, &right, 0.0);
        }
        assert!(state.player.frame > 0);
    }

    #[test]
    fn camera_follows_and_clamps() {
        let mut state = playing(1);
        state.player.pos.x = 1000.0;
        assert_eq!(state.camera_x(), 550.0);
        state.player.pos.x = 100_000.0;
        assert_eq!(state.camera_x(), state.level.width_px() - 900.0);
    }

    #[test]
    fn run_timer_counts_from_first_tick_and_resets_on_restart() {
        let mut state = playing(2);
        assert_eq!(state.elapsed_secs(), 0);

        tick(&mut state, &TickInput::default(), 10.0);
        assert_eq!(state.started_at, Some(10.0));
        tick(&mut state, &TickInput::default(), 13.7);
        assert_eq!(state.elapsed_secs(), 3);

        // Keeps running while paused
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, 14.0);
        tick(&mut state, &TickInput::default(), 16.2);
        assert_eq!(state.mode, GameMode::Paused);
        assert_eq!(state.elapsed_secs(), 6);

        state.init_game(2).unwrap();
        assert_eq!(state.started_at, None);
        assert_eq!(state.elapsed_secs(), 0);
        tick(&mut state, &TickInput::default(), 20.0);
        assert_eq!(state.started_at, Some(20.0));
        assert_eq!(state.elapsed_secs(), 0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing(3);
        let mut state2 = playing(3);

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                jump: true,
                ..Default::default()
            },
            TickInput {
                shoot: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..400 {
            let input = &inputs[i % inputs.len()];
            let now = i as f64 * FRAME;
            tick(&mut state1, input, now);
            tick(&mut state2, input, now);
        }

        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.bees, state2.bees);
        assert_eq!(state1.eggs, state2.eggs);
        assert_eq!(state1.counters, state2.counters);
        assert_eq!(state1.mode, state2.mode);
    }
}
