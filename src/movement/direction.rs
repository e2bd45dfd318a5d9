//! Movement domain: direction and animation resolution from held input.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Order in which held directions are considered; the first one held wins.
    pub const PRIORITY: [Facing; 4] = [Facing::Left, Facing::Right, Facing::Up, Facing::Down];

    pub fn name(self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    /// World-space unit vector (y up).
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::Y,
            Facing::Down => Vec2::NEG_Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

/// Level state of the four directional inputs for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldDirections {
    pub fn only(facing: Facing) -> Self {
        let mut held = Self::default();
        match facing {
            Facing::Up => held.up = true,
            Facing::Down => held.down = true,
            Facing::Left => held.left = true,
            Facing::Right => held.right = true,
        }
        held
    }

    pub fn is_held(&self, facing: Facing) -> bool {
        match facing {
            Facing::Up => self.up,
            Facing::Down => self.down,
            Facing::Left => self.left,
            Facing::Right => self.right,
        }
    }

    pub fn first_held(&self) -> Option<Facing> {
        Facing::PRIORITY.into_iter().find(|f| self.is_held(*f))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Motion {
    #[default]
    Idle,
    Run,
}

/// Names an actor animation: `run-<direction>` or `idle-<direction>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimationKey {
    pub motion: Motion,
    pub facing: Facing,
}

impl AnimationKey {
    pub fn idle(facing: Facing) -> Self {
        Self {
            motion: Motion::Idle,
            facing,
        }
    }

    pub fn run(facing: Facing) -> Self {
        Self {
            motion: Motion::Run,
            facing,
        }
    }
}

impl std::fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let motion = match self.motion {
            Motion::Idle => "idle",
            Motion::Run => "run",
        };
        write!(f, "{}-{}", motion, self.facing.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionResolution {
    pub velocity: Vec2,
    /// Becomes the next tick's `last` direction.
    pub facing: Facing,
    pub animation: AnimationKey,
}

/// Resolve one tick of movement. Only one axis ever moves: diagonals are not
/// supported.
pub fn resolve_motion(held: HeldDirections, last: Facing, speed: f32) -> MotionResolution {
    match held.first_held() {
        Some(facing) => MotionResolution {
            velocity: facing.unit() * speed,
            facing,
            animation: AnimationKey::run(facing),
        },
        None => MotionResolution {
            velocity: Vec2::ZERO,
            facing: last,
            animation: AnimationKey::idle(last),
        },
    }
}
