//! Player kinematics and tile collision
//!
//! Movement is resolved one axis at a time against every solid rectangle:
//! horizontal first, then vertical. Each overlap clamps the player to the
//! near edge of the rectangle it hit, and later overlaps overwrite earlier
//! clamps, so resolution is order-dependent in scan order.

use super::grid::TileGrid;
use super::rect::Rect;
use super::state::{Facing, Player};
use super::tick::TickInput;
use crate::consts::{TILE_SIZE, VIEWPORT_HEIGHT};
use crate::tuning::Tuning;

/// Outcome of vertical resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalContact {
    /// Came to rest on top of a solid
    pub landed: bool,
    /// Hit the underside of a solid while rising
    pub bumped: bool,
}

/// What happened to the player during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStep {
    /// Non-zero horizontal input this tick
    pub moving: bool,
    pub contact: VerticalContact,
    /// Dropped below the bottom of the viewport
    pub fell_out: bool,
    /// Sank far enough into goal water
    pub reached_goal: bool,
}

/// Net horizontal displacement. Holding both directions cancels out.
pub fn horizontal_displacement(left: bool, right: bool, speed: f32) -> f32 {
    match (left, right) {
        (false, true) => speed,
        (true, false) => -speed,
        _ => 0.0,
    }
}

/// Move `rect` by `dx` and push it back out of any solid it now overlaps
pub fn resolve_horizontal(rect: &mut Rect, dx: f32, solids: &[Rect]) {
    rect.pos.x += dx;
    for solid in solids {
        if rect.overlaps(solid) {
            if dx > 0.0 {
                rect.pos.x = solid.left() - rect.size.x;
            } else if dx < 0.0 {
                rect.pos.x = solid.right();
            }
        }
    }
}

/// Move `rect` by `dy` and clamp it onto or under any solid it now overlaps
pub fn resolve_vertical(rect: &mut Rect, dy: f32, solids: &[Rect]) -> VerticalContact {
    let mut contact = VerticalContact::default();
    rect.pos.y += dy;
    for solid in solids {
        if rect.overlaps(solid) {
            if dy > 0.0 {
                rect.pos.y = solid.top() - rect.size.y;
                contact.landed = true;
            } else if dy < 0.0 {
                rect.pos.y = solid.bottom();
                contact.bumped = true;
            }
        }
    }
    contact
}

/// True if `rect` overlaps a goal water tile and reaches below its top third
pub fn in_goal_water(rect: &Rect, grid: &TileGrid) -> bool {
    grid.goal_waters()
        .iter()
        .any(|water| rect.overlaps(water) && rect.bottom() > water.top() + TILE_SIZE / 3.0)
}

/// Advance the player one playing tick: boost expiry, input, gravity and
/// collision. `now` is the host clock in seconds.
pub fn step_player(
    player: &mut Player,
    grid: &TileGrid,
    tuning: &Tuning,
    input: &TickInput,
    now: f64,
) -> PlayerStep {
    if player.boost_active && now >= player.boost_until {
        player.speed = tuning.base_speed;
        player.boost_active = false;
        log::trace!("Speed boost expired");
    }

    let dx = horizontal_displacement(input.left, input.right, player.speed);

    // With the default zero cooldown this gate always passes
    let cooled = tuning.jump_cooldown_secs <= 0.0
        || player
            .last_jump_at
            .is_none_or(|at| now - at >= tuning.jump_cooldown_secs);
    if input.jump && player.jumps_remaining > 0 && cooled && player.velocity >= 0.0 {
        player.velocity = if player.boost_active {
            tuning.boost_jump_power
        } else {
            tuning.jump_power
        };
        player.jumps_remaining -= 1;
        player.last_jump_at = Some(now);
    }

    if dx > 0.0 {
        player.facing = Facing::Right;
    } else if dx < 0.0 {
        player.facing = Facing::Left;
    }

    player.velocity += tuning.gravity;
    let dy = player.velocity;

    let mut rect = player.rect();
    resolve_horizontal(&mut rect, dx, &grid.solids);
    let contact = resolve_vertical(&mut rect, dy, &grid.solids);
    if contact.landed || contact.bumped {
        player.velocity = 0.0;
    }
    if contact.landed {
        player.jumps_remaining = tuning.max_jumps;
    }

    player.pos.x = rect.pos.x.max(0.0);
    player.pos.y = rect.pos.y;

    PlayerStep {
        moving: dx != 0.0,
        contact,
        fell_out: player.pos.y > VIEWPORT_HEIGHT,
        reached_goal: in_goal_water(&rect, grid),
    }
}
