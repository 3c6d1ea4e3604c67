//! Per-frame input signals supplied by the driver.
//!
//! Raw device polling lives outside the simulation; these types are the
//! already-decoded movement and aim intent for one frame.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Digital movement keys held this frame. Any combination is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Movement intent for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MovementInput {
    #[default]
    Idle,
    Directions(DirectionSet),
    /// Analog stick vector. Lengths above 1 are clamped.
    Analog { vector: Vec2 },
}

/// Fire request for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AimInput {
    /// Fire at a screen point (mouse).
    At { target: Vec2 },
    /// Fire along a direction (right stick).
    Toward { direction: Vec2 },
}

/// Everything the driver feeds into one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub movement: MovementInput,
    pub aim: Option<AimInput>,
}

impl DirectionSet {
    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Sum of the held unit directions, not normalized. Opposite keys
    /// cancel out.
    pub fn vector(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }
}

impl MovementInput {
    /// Direction to travel at full speed scale, length in `0..=1`.
    /// Digital input is normalized so diagonals are not faster.
    pub fn direction(&self) -> Vec2 {
        match self {
            MovementInput::Idle => Vec2::ZERO,
            MovementInput::Directions(keys) => keys.vector().normalize_or_zero(),
            MovementInput::Analog { vector } => {
                if vector.is_finite() {
                    vector.clamp_length_max(1.0)
                } else {
                    Vec2::ZERO
                }
            }
        }
    }
}

impl AimInput {
    /// World point to fire at from `origin`.
    pub fn target_from(&self, origin: Vec2) -> Vec2 {
        match *self {
            AimInput::At { target } => target,
            AimInput::Toward { direction } => origin + direction,
        }
    }
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(keys: DirectionSet) -> Self {
        Self {
            movement: MovementInput::Directions(keys),
            aim: None,
        }
    }
}
