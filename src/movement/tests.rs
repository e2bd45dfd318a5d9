//! Movement domain: tests for direction resolution and edge detection.

use bevy::prelude::{Rect, Vec2};

use super::*;

const SPEED: f32 = 80.0;

// -----------------------------------------------------------------------------
// Direction resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_single_direction_runs_that_way() {
    for facing in [Facing::Up, Facing::Down, Facing::Left, Facing::Right] {
        let resolution = resolve_motion(HeldDirections::only(facing), Facing::Down, SPEED);
        assert_eq!(resolution.facing, facing);
        assert_eq!(resolution.velocity, facing.unit() * SPEED);
        assert_eq!(resolution.animation, AnimationKey::run(facing));
        assert_eq!(resolution.animation.to_string(), format!("run-{}", facing.name()));
    }
}

#[test]
fn test_up_moves_toward_positive_y() {
    let resolution = resolve_motion(HeldDirections::only(Facing::Up), Facing::Down, SPEED);
    assert_eq!(resolution.velocity, Vec2::new(0.0, SPEED));
}

#[test]
fn test_nothing_held_idles_in_last_direction() {
    let resolution = resolve_motion(HeldDirections::default(), Facing::Left, SPEED);
    assert_eq!(resolution.velocity, Vec2::ZERO);
    assert_eq!(resolution.facing, Facing::Left);
    assert_eq!(resolution.animation.to_string(), "idle-left");
}

#[test]
fn test_priority_left_right_up_down() {
    let all = HeldDirections {
        left: true,
        right: true,
        up: true,
        down: true,
    };
    assert_eq!(all.first_held(), Some(Facing::Left));

    let right_up = HeldDirections {
        right: true,
        up: true,
        ..Default::default()
    };
    assert_eq!(right_up.first_held(), Some(Facing::Right));

    let up_down = HeldDirections {
        up: true,
        down: true,
        ..Default::default()
    };
    assert_eq!(up_down.first_held(), Some(Facing::Up));
}

#[test]
fn test_never_diagonal() {
    // Every combination of the four keys
    for bits in 0u8..16 {
        let held = HeldDirections {
            left: bits & 1 != 0,
            right: bits & 2 != 0,
            up: bits & 4 != 0,
            down: bits & 8 != 0,
        };
        let velocity = resolve_motion(held, Facing::Down, SPEED).velocity;
        assert!(
            velocity.x == 0.0 || velocity.y == 0.0,
            "diagonal velocity {:?} for {:?}",
            velocity,
            held
        );
    }
}

#[test]
fn test_last_direction_follows_most_recent_hold() {
    let sequence = [
        Some(Facing::Right),
        Some(Facing::Right),
        None,
        Some(Facing::Up),
        None,
        None,
    ];

    let mut last = Facing::default();
    assert_eq!(last, Facing::Down);
    let mut most_recent = None;

    for step in sequence {
        let held = step.map(HeldDirections::only).unwrap_or_default();
        let resolution = resolve_motion(held, last, SPEED);
        if let Some(facing) = step {
            most_recent = Some(facing);
            assert_eq!(resolution.animation, AnimationKey::run(facing));
        }
        last = resolution.facing;
    }

    assert_eq!(Some(last), most_recent);
    assert_eq!(last, Facing::Up);
}

// -----------------------------------------------------------------------------
// Edge detection tests
// -----------------------------------------------------------------------------

#[test]
fn test_edge_fires_once_per_press() {
    let mut edge = EdgeDetector::default();
    let levels = [false, true, true, true, false, true];
    let fired: Vec<bool> = levels
        .iter()
        .map(|&pressed| {
            edge.update(pressed);
            edge.just_pressed()
        })
        .collect();

    assert_eq!(fired, vec![false, true, false, false, false, true]);
}

#[test]
fn test_control_input_derives_left_right_edges_from_held() {
    let mut input = ControlInput::default();

    input.sample(HeldDirections::only(Facing::Left), false);
    assert!(input.left.just_pressed());
    assert!(!input.right.just_pressed());

    input.sample(HeldDirections::only(Facing::Left), true);
    assert!(!input.left.just_pressed());
    assert!(input.interact.just_pressed());

    input.sample(HeldDirections::only(Facing::Right), true);
    assert!(input.right.just_pressed());
    assert!(!input.interact.just_pressed());
}

// -----------------------------------------------------------------------------
// Actor geometry tests
// -----------------------------------------------------------------------------

#[test]
fn test_actor_bounds_cover_full_frame_above_feet() {
    let feet = Vec2::new(16.0, 10.0);
    let bounds = actor_bounds(body_center_from_feet(feet));
    assert_eq!(bounds, Rect::new(8.0, 10.0, 24.0, 42.0));
}

#[test]
fn test_sprite_offset_centers_frame_on_bounds() {
    let center = body_center_from_feet(Vec2::new(0.0, 0.0));
    let sprite_center = center + ACTOR_SPRITE_OFFSET.truncate();
    assert_eq!(sprite_center, actor_bounds(center).center());
}
