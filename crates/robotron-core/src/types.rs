//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

/// Authoritative entity position in screen space (pixels, y grows downward).
///
/// Kept as floats so sub-pixel motion accumulates; the integer `Bounds`
/// box is derived from it every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Integer axis-aligned rectangle, pixel quantized.
///
/// `x`/`y` is the top-left corner. Used for collision, screen containment
/// and sprite source regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed frames.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w` x `h` rectangle whose center sits on `center`.
    pub fn centered_at(w: i32, h: i32, center: Vec2) -> Self {
        let mut rect = Self::new(0, 0, w, h);
        rect.set_center(center);
        rect
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Pixel center (integer valued).
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x.saturating_add(self.w / 2) as f32,
            self.y.saturating_add(self.h / 2) as f32,
        )
    }

    /// Move the rectangle so its center lands on `center`, rounding down to
    /// the pixel grid.
    pub fn set_center(&mut self, center: Vec2) {
        self.x = (center.x.floor() as i32).saturating_sub(self.w / 2);
        self.y = (center.y.floor() as i32).saturating_sub(self.h / 2);
    }

    /// Strict overlap test. Rectangles that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Copy of `self` moved the minimum distance needed to lie inside
    /// `outer`. A rectangle wider (or taller) than `outer` is centered on
    /// that axis instead.
    pub fn clamped_within(&self, outer: &Rect) -> Rect {
        let x = if self.w >= outer.w {
            outer.x + outer.w / 2 - self.w / 2
        } else if self.x < outer.x {
            outer.x
        } else if self.right() > outer.right() {
            outer.right() - self.w
        } else {
            self.x
        };

        let y = if self.h >= outer.h {
            outer.y + outer.h / 2 - self.h / 2
        } else if self.y < outer.y {
            outer.y
        } else if self.bottom() > outer.bottom() {
            outer.bottom() - self.h
        } else {
            self.y
        };

        Rect::new(x, y, self.w, self.h)
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
