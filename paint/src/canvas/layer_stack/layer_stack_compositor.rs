// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Flatten the visible layers of a [`LayerStack`] into one opaque image.
//!
//! ```text
//! white ──over──▶ layer 1 ──over──▶ layer 2 (hidden, skipped) ──over──▶ layer 3
//! ```
//!
//! The backdrop is opaque, so the result is opaque too. [`LayerStack::pick_color`] runs
//! the same fold for a single pixel, so it always agrees with
//! [`LayerStack::composite_visible`].

use image::{Rgba, RgbaImage};

#[allow(clippy::wildcard_imports)]
use super::*;
use crate::{RgbColor, RgbaColor, blend_source_over};

impl LayerStack {
    /// A fresh opaque image of the canvas size with every visible layer drawn on a white
    /// backdrop, bottom to top.
    #[must_use]
    pub fn composite_visible(&self) -> RgbaImage {
        let size = self.canvas_size;
        let mut output =
            RgbaImage::from_pixel(*size.width, *size.height, RgbaColor::OPAQUE_WHITE.into());

        for layer in self.iter_bottom_to_top().filter(|it| it.visible) {
            for (dst, src) in output.pixels_mut().zip(layer.surface.as_image().pixels()) {
                let blended = blend_source_over((*dst).into(), (*src).into());
                *dst = Rgba::from(blended);
            }
        }

        output
    }

    /// The composited color at one pixel, or [None] if `(x, y)` is off the canvas.
    #[must_use]
    pub fn pick_color(&self, x: u32, y: u32) -> Option<RgbColor> {
        if !self.canvas_size.contains(x, y) {
            return None;
        }
        let color = self
            .iter_bottom_to_top()
            .filter(|it| it.visible)
            .filter_map(|it| it.surface.get_pixel(x, y))
            .fold(RgbaColor::OPAQUE_WHITE, blend_source_over);
        Some(color.rgb())
    }
}
