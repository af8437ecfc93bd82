// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Source-over blending of straight (non premultiplied) alpha colors, in integer math so
//! that compositing is bit for bit deterministic.
//!
//! ```text
//! out_a = src_a + dst_a × (1 − src_a)
//! out_c = (src_c × src_a + dst_c × dst_a × (1 − src_a)) / out_a
//! ```
//!
//! Everything is scaled by 255 (once for alpha, twice for the products) and rounded to
//! nearest at the end.

use crate::{RgbColor, RgbaColor};

const MAX: u32 = 255;

/// Draw `src` on top of `dst`.
#[must_use]
pub fn blend_source_over(dst: RgbaColor, src: RgbaColor) -> RgbaColor {
    if src.is_opaque() {
        return src;
    }
    if src.is_transparent() {
        return dst;
    }

    let src_a = u32::from(src.alpha);
    // Both weights are scaled by 255².
    let src_weight = src_a * MAX;
    let dst_weight = u32::from(dst.alpha) * (MAX - src_a);
    let out_weight = src_weight + dst_weight;

    let channel = |src_c: u8, dst_c: u8| -> u8 {
        let sum = u32::from(src_c) * src_weight + u32::from(dst_c) * dst_weight;
        // Weighted average of two bytes, so it always fits.
        u8::try_from((sum + out_weight / 2) / out_weight).unwrap_or(u8::MAX)
    };

    let alpha = u8::try_from((out_weight + MAX / 2) / MAX).unwrap_or(u8::MAX);

    RgbaColor::new(
        channel(src.red, dst.red),
        channel(src.green, dst.green),
        channel(src.blue, dst.blue),
        alpha,
    )
}

/// What `pixel` looks like when drawn over an opaque white backdrop.
#[must_use]
pub fn composite_over_white(pixel: RgbaColor) -> RgbColor {
    blend_source_over(RgbaColor::OPAQUE_WHITE, pixel).rgb()
}
