//! Dynamic entity lifecycles: bees, eggs and pickups
//!
//! Each pass visits every live entity at most once per tick and removes
//! the ones it destroys in place.

use glam::Vec2;

use super::mode::GameMode;
use super::state::{Bee, Egg, GameEvent, GameState, PickupKind};
use crate::consts::*;

impl GameState {
    /// Throw an egg from the duck in the direction it faces
    pub fn fire_egg(&mut self) {
        let sign = self.player.facing.sign();
        let id = self.next_entity_id();
        self.eggs.push(Egg {
            id,
            pos: self.player.pos + Vec2::new(sign * EGG_SPAWN_OFFSET_X, EGG_SPAWN_OFFSET_Y),
            vel_x: sign * self.tuning.egg_speed,
        });
        self.push_event(GameEvent::EggFired);
    }

    /// Spawn a bee for every trigger the player has passed that has not
    /// fired yet this session
    pub fn spawn_bees(&mut self) {
        let player_x = self.player.pos.x;
        let fired = &mut self.fired_triggers;
        let due: Vec<f32> = self
            .triggers
            .iter()
            .filter(|trigger| player_x >= trigger.trigger_x as f32)
            .filter(|trigger| fired.insert(trigger.trigger_x))
            .map(|trigger| trigger.spawn_y as f32)
            .collect();

        let spawn_x = self.camera_x() + VIEWPORT_WIDTH + BEE_SPAWN_AHEAD;
        for spawn_y in due {
            let id = self.next_entity_id();
            log::debug!("Bee {id} spawned at ({spawn_x}, {spawn_y})");
            self.bees.push(Bee {
                id,
                pos: Vec2::new(spawn_x, spawn_y),
            });
        }
    }

    /// Drift bees left, sting the player, and drop bees behind the camera
    pub fn update_bees(&mut self) {
        let player_rect = self.player.rect();
        let camera = self.camera_x();
        let speed = self.tuning.bee_speed;
        let mut stings = 0u8;

        self.bees.retain_mut(|bee| {
            bee.pos.x -= speed;
            let rect = bee.rect();
            if rect.overlaps(&player_rect) {
                stings += 1;
                return false;
            }
            rect.right() >= camera
        });

        for _ in 0..stings {
            self.player.lives = self.player.lives.saturating_sub(1);
            self.push_event(GameEvent::PlayerHurt);
        }
        if stings > 0 {
            log::debug!("Stung {stings}x, {} lives left", self.player.lives);
            if self.player.lives == 0 {
                self.finish_run(GameMode::Lost);
            }
        }

        self.bee_on_screen = self
            .bees
            .iter()
            .any(|bee| bee.rect().spans_x(camera, camera + VIEWPORT_WIDTH));
    }

    /// Move eggs; an egg is destroyed by the first solid or bee it touches,
    /// taking the bee with it, or once it leaves the padded camera window
    pub fn update_eggs(&mut self) {
        let camera = self.camera_x();
        for i in (0..self.eggs.len()).rev() {
            let egg = &mut self.eggs[i];
            egg.pos.x += egg.vel_x;
            let rect = egg.rect();

            if self.grid.first_solid_hit(&rect).is_some() {
                self.eggs.remove(i);
                continue;
            }

            if let Some(hit) = self.bees.iter().rposition(|bee| bee.rect().overlaps(&rect)) {
                let bee = self.bees.remove(hit);
                self.eggs.remove(i);
                log::debug!("Bee {} swatted", bee.id);
                self.push_event(GameEvent::BeeSwatted);
                continue;
            }

            let x = rect.left();
            if x < camera - EGG_OFFSCREEN_MARGIN
                || x > camera + VIEWPORT_WIDTH + EGG_OFFSCREEN_MARGIN
            {
                self.eggs.remove(i);
            }
        }
    }

    /// Collect every pickup the player overlaps. `now` arms the chocolate boost.
    pub fn collect_pickups(&mut self, now: f64) {
        let player_rect = self.player.rect();
        let mut collected = Vec::new();
        self.pickups.retain(|pickup| {
            let hit = pickup.rect.overlaps(&player_rect);
            if hit {
                collected.push(pickup.kind);
            }
            !hit
        });

        for kind in collected {
            self.counters.record(kind);
            if kind == PickupKind::Chocolate {
                self.player.speed = self.tuning.boosted_speed();
                self.player.boost_active = true;
                self.player.boost_until = now + self.tuning.boost_duration_secs;
                log::debug!("Speed boost until {:.2}", self.player.boost_until);
            }
            self.push_event(GameEvent::PickupCollected(kind));
        }
    }
}
