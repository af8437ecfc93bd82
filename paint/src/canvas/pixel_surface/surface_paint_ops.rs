// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stroke rasterization. A stroke is drawn one segment at a time, from the previous
//! pointer position to the current one. Coverage is binary: a pixel is painted when its
//! center falls inside the outline of the segment.
//!
//! ```text
//!  Round                         Square
//!    ╭───────────────╮           ┌─────────────────┐
//!   (  from ──── to   )          │ ·from ──── to·  │
//!    ╰───────────────╯           └─────────────────┘
//!  distance to segment ≤ w/2     segment extended by w/2 at both ends
//! ```

use std::f32::consts::SQRT_2;

#[allow(clippy::wildcard_imports)]
use super::*;
use crate::{CanvasPos, RgbaColor};

/// Pixel centers exactly on the outline count as inside, even after `f32` round off.
const COVERAGE_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum BrushShape {
    /// Round caps and joins.
    #[default]
    Round,
    /// Square caps.
    Square,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum PaintMode {
    /// Source-over with the stroke color.
    #[default]
    Normal,
    /// Destination-out at full coverage, covered pixels become fully transparent.
    Erase,
}

/// Everything about a stroke except where it goes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StrokeStyle {
    pub color: RgbaColor,
    pub brush_width: u32,
    pub shape: BrushShape,
    pub mode: PaintMode,
}

impl StrokeStyle {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn half_width(&self) -> f32 { self.brush_width as f32 / 2.0 }
}

impl PixelSurface {
    /// Paint the segment `from → to` with `style`. Pass the same point twice to paint a
    /// single dab (a disc for [`BrushShape::Round`], a square for
    /// [`BrushShape::Square`]). Anything outside the surface is clipped, and a zero brush
    /// width paints nothing.
    pub fn paint_segment(&mut self, from: CanvasPos, to: CanvasPos, style: &StrokeStyle) {
        let half = style.half_width();
        let is_finite = [from.x, from.y, to.x, to.y].iter().all(|it| it.is_finite());
        if half <= 0.0 || !is_finite {
            return;
        }

        let Some((min_x, max_x)) =
            clip_span(from.x.min(to.x), from.x.max(to.x), half, self.size().width.0)
        else {
            return;
        };
        let Some((min_y, max_y)) =
            clip_span(from.y.min(to.y), from.y.max(to.y), half, self.size().height.0)
        else {
            return;
        };

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = CanvasPos::pixel_center(x, y);
                let covered = match style.shape {
                    BrushShape::Round => covers_round(from, to, half, center),
                    BrushShape::Square => covers_square(from, to, half, center),
                };
                if !covered {
                    continue;
                }
                let new_pixel = match style.mode {
                    PaintMode::Erase => RgbaColor::TRANSPARENT,
                    PaintMode::Normal => match self.get_pixel(x, y) {
                        Some(old_pixel) => blend_source_over(old_pixel, style.color),
                        None => continue,
                    },
                };
                self.set_pixel(x, y, new_pixel);
            }
        }
    }
}

/// Pixel indices `[start, end)` along one axis whose centers could be covered by a
/// segment spanning `[lo, hi]` with the given half width, clipped to `[0, limit)`.
/// Returns [None] when nothing is on the surface.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn clip_span(lo: f32, hi: f32, half: f32, limit: u32) -> Option<(u32, u32)> {
    // Square caps on a diagonal segment reach further than `half` along an axis.
    let reach = half * SQRT_2 + 1.0;
    let start = (lo - reach).floor().max(0.0);
    let end = (hi + reach).ceil().min(limit as f32);
    if start >= end {
        return None;
    }
    Some((start as u32, end as u32))
}

fn covers_round(from: CanvasPos, to: CanvasPos, half: f32, p: CanvasPos) -> bool {
    let d = to - from;
    let len_sq = d.dot(d);
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((p - from).dot(d) / len_sq).clamp(0.0, 1.0)
    };
    let closest = CanvasPos::new(from.x + d.x * t, from.y + d.y * t);
    (p - closest).length() <= half + COVERAGE_EPSILON
}

fn covers_square(from: CanvasPos, to: CanvasPos, half: f32, p: CanvasPos) -> bool {
    let d = to - from;
    let len = d.length();
    let rel = p - from;
    if len == 0.0 {
        return rel.x.abs() <= half + COVERAGE_EPSILON
            && rel.y.abs() <= half + COVERAGE_EPSILON;
    }
    let unit = CanvasPos::new(d.x / len, d.y / len);
    let along = rel.dot(unit);
    let across = rel.y * unit.x - rel.x * unit.y;
    along >= -half - COVERAGE_EPSILON
        && along <= len + half + COVERAGE_EPSILON
        && across.abs() <= half + COVERAGE_EPSILON
}
