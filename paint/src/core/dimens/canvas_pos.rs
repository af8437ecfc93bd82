// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pointer positions arrive in canvas space as floating point coordinates, where pixel
//! `(x, y)` covers the square `[x, x + 1) × [y, y + 1)` and its center is at
//! `(x + 0.5, y + 0.5)`.
//!
//! ```text
//!     0     1     2
//!   0 ┼─────┼─────┼── x
//!     │  ●  │     │   ● = center of pixel (0, 0) = (0.5, 0.5)
//!   1 ┼─────┼─────┼
//!     │
//!     y
//! ```

use std::ops::Sub;

#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct CanvasPos {
    pub x: f32,
    pub y: f32,
}

impl CanvasPos {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// The center of the pixel at `(x, y)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pixel_center(x: u32, y: u32) -> Self {
        Self::new(x as f32 + 0.5, y as f32 + 0.5)
    }

    /// The pixel that contains this position, or [None] if the position is left of or
    /// above the canvas origin (or not a number).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_pixel(&self) -> Option<(u32, u32)> {
        if !(self.x >= 0.0 && self.y >= 0.0) {
            return None;
        }
        let x = self.x.floor();
        let y = self.y.floor();
        if x > u32::MAX as f32 || y > u32::MAX as f32 {
            return None;
        }
        Some((x as u32, y as u32))
    }

    #[must_use]
    pub fn dot(&self, other: CanvasPos) -> f32 { self.x * other.x + self.y * other.y }

    #[must_use]
    pub fn length(&self) -> f32 { self.dot(*self).sqrt() }
}

impl Sub for CanvasPos {
    type Output = CanvasPos;

    fn sub(self, rhs: Self) -> Self::Output { CanvasPos::new(self.x - rhs.x, self.y - rhs.y) }
}

impl From<(f32, f32)> for CanvasPos {
    fn from((x, y): (f32, f32)) -> Self { Self::new(x, y) }
}
