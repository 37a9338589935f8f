//! # Physics
//!
//! Per-tick player integration and AABB resolution against platforms.
//!
//! Movement is resolved one axis at a time: horizontal first, then vertical.
//! For each axis the set of overlapping platforms is gathered once, after the
//! move, and corrections are applied in room order. There is no ranking by
//! penetration depth. Horizontally every clamp applies, so the last
//! overlapping platform wins. Vertically the first clamp zeroes the velocity,
//! which turns the remaining overlaps into no-ops.

use crate::config::{GRAVITY, INITIAL_FALL_SPEED};
use crate::game::{Platform, Player, Rect};

/// Applies gravity to the player's vertical velocity.
///
/// A player with exactly zero vertical speed snaps straight to the initial
/// fall speed instead of accelerating from rest.
pub fn apply_gravity(player: &mut Player) {
    if player.velocity_y == 0.0 {
        player.velocity_y = INITIAL_FALL_SPEED;
    } else {
        player.velocity_y += GRAVITY;
    }
}

/// Advances the player by one tick against the given platforms.
///
/// `floor_y` is the fallback ground line the player can never sink below.
pub fn step_player<'a, I>(player: &mut Player, platforms: I, floor_y: i32)
where
    I: IntoIterator<Item = &'a Platform>,
    I::IntoIter: Clone,
{
    let platforms = platforms.into_iter();

    apply_gravity(player);

    player.rect.x += player.velocity_x;
    resolve_horizontal(player, &overlapping(&player.rect, platforms.clone()));

    player.rect.y = (player.rect.y as f32 + player.velocity_y) as i32;
    player.on_ground = false;
    resolve_vertical(player, &overlapping(&player.rect, platforms));

    apply_floor(player, floor_y);
}

/// Collects the rectangles of every platform overlapping `rect`, in order.
fn overlapping<'a>(rect: &Rect, platforms: impl Iterator<Item = &'a Platform>) -> Vec<Rect> {
    platforms
        .map(|platform| platform.rect)
        .filter(|platform| platform.overlaps(rect))
        .collect()
}

fn resolve_horizontal(player: &mut Player, hits: &[Rect]) {
    for platform in hits {
        if player.velocity_x > 0 {
            player.rect.set_right(platform.left());
        } else if player.velocity_x < 0 {
            player.rect.set_left(platform.right());
        }
    }
}

fn resolve_vertical(player: &mut Player, hits: &[Rect]) {
    for platform in hits {
        if player.velocity_y > 0.0 {
            player.rect.set_bottom(platform.top());
            player.on_ground = true;
        } else if player.velocity_y < 0.0 {
            player.rect.set_top(platform.bottom());
        }
        player.velocity_y = 0.0;
    }
}

fn apply_floor(player: &mut Player, floor_y: i32) {
    if player.rect.bottom() >= floor_y {
        player.rect.set_bottom(floor_y);
        player.on_ground = true;
        player.velocity_y = 0.0;
    }
}
