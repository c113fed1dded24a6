//! Axis-aligned bounding box geometry
//!
//! Collision detection uses the non-strict [`overlaps`] test (touching
//! counts). The response phase re-tests with strict comparisons in
//! [`bounce_axis`], so edges that are merely flush on one axis never pick
//! that axis for the bounce.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The four bounding coordinates of a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Edges {
    /// Edges of a circle: exactly `center ± radius` on each axis
    #[inline]
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            left: center.x - radius,
            right: center.x + radius,
            top: center.y - radius,
            bottom: center.y + radius,
        }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Velocity component to invert after a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceAxis {
    /// Invert dy (contact on a top or bottom face)
    Vertical,
    /// Invert dx (contact on a left or right face)
    Horizontal,
}

impl BounceAxis {
    /// Apply the bounce to a velocity
    #[inline]
    pub fn reflect(self, vel: Vec2) -> Vec2 {
        match self {
            BounceAxis::Vertical => Vec2::new(vel.x, -vel.y),
            BounceAxis::Horizontal => Vec2::new(-vel.x, vel.y),
        }
    }
}

/// Non-strict AABB intersection test
#[inline]
pub fn overlaps(a: &Edges, b: &Rect) -> bool {
    a.left <= b.right() && a.right >= b.x && a.top <= b.bottom() && a.bottom >= b.y
}

/// Pick the bounce axis for a detected contact.
///
/// Strict horizontal overlap is tried first and short-circuits the vertical
/// check, so a corner hit always flips dy. Returns `None` when the shapes
/// only touch on both axes.
pub fn bounce_axis(a: &Edges, b: &Rect) -> Option<BounceAxis> {
    if a.left < b.right() && a.right > b.x {
        Some(BounceAxis::Vertical)
    } else if a.top < b.bottom() && a.bottom > b.y {
        Some(BounceAxis::Horizontal)
    } else {
        None
    }
}
