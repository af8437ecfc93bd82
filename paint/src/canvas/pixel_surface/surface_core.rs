// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`PixelSurface`] is the raster that backs exactly one layer. It is a fixed size grid
//! of straight alpha RGBA pixels, stored in an [`image::RgbaImage`] so that it can be
//! encoded to PNG and composited without any conversions.
//!
//! The size is fixed when the surface is created and never changes. Everything that
//! writes pixels goes through the methods in this module and its siblings:
//! - [`super::surface_paint_ops`] for strokes and erasing.
//! - [`super::surface_codec`] for snapshots.
//! - [`super::surface_blend`] for the source-over math.

use std::fmt::{self, Debug};

use image::RgbaImage;

use super::composite_over_white;
use crate::{CanvasError, CanvasSize, RgbColor, RgbaColor, height, width};

#[derive(Clone, PartialEq, Eq)]
pub struct PixelSurface {
    buffer: RgbaImage,
}

impl PixelSurface {
    /// Every pixel is [`RgbaColor::TRANSPARENT`].
    #[must_use]
    pub fn new_transparent(size: CanvasSize) -> Self {
        Self {
            buffer: RgbaImage::new(*size.width, *size.height),
        }
    }

    /// Every pixel is `color` with its alpha forced to 255.
    #[must_use]
    pub fn new_opaque(size: CanvasSize, color: RgbColor) -> Self {
        let mut it = Self::new_transparent(size);
        it.fill_opaque(color);
        it
    }

    pub(crate) fn from_image(buffer: RgbaImage) -> Self { Self { buffer } }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        width(self.buffer.width()) + height(self.buffer.height())
    }

    #[must_use]
    pub fn as_image(&self) -> &RgbaImage { &self.buffer }

    /// Returns [None] if `(x, y)` is out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<RgbaColor> {
        self.buffer.get_pixel_checked(x, y).map(|it| RgbaColor::from(*it))
    }

    /// Returns `false` (and does nothing) if `(x, y)` is out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: RgbaColor) -> bool {
        match self.buffer.get_pixel_mut_checked(x, y) {
            Some(pixel) => {
                *pixel = color.into();
                true
            }
            None => false,
        }
    }

    /// Every pixel becomes fully transparent.
    pub fn clear(&mut self) {
        for pixel in self.buffer.pixels_mut() {
            *pixel = RgbaColor::TRANSPARENT.into();
        }
    }

    /// Every pixel becomes `color` at full opacity. Only the bottom layer of a new stack
    /// starts out like this.
    pub fn fill_opaque(&mut self, color: RgbColor) {
        let pixel = RgbaColor::opaque(color).into();
        for it in self.buffer.pixels_mut() {
            *it = pixel;
        }
    }

    /// The color this surface alone shows at `(x, y)`, which is the pixel composited
    /// over an opaque white backdrop. Returns [None] if `(x, y)` is out of bounds.
    #[must_use]
    pub fn sample_color(&self, x: u32, y: u32) -> Option<RgbColor> {
        self.get_pixel(x, y).map(composite_over_white)
    }

    /// Replace every pixel with the pixels of `other`, which must be the same size. This
    /// is how undo and project load restore a layer.
    ///
    /// # Errors
    ///
    /// [`CanvasError::DimensionMismatch`] if the sizes differ, in which case `self` is
    /// left untouched.
    pub fn replace_pixels(&mut self, other: PixelSurface) -> Result<(), CanvasError> {
        if other.size() != self.size() {
            return Err(CanvasError::DimensionMismatch {
                expected: self.size(),
                actual: other.size(),
            });
        }
        self.buffer = other.buffer;
        Ok(())
    }

    /// Number of pixels that have any opacity at all.
    #[must_use]
    pub fn count_non_transparent(&self) -> usize {
        self.buffer.pixels().filter(|it| it.0[3] != 0).count()
    }
}

impl Debug for PixelSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PixelSurface [size: {} | non transparent: {}]",
            self.size(),
            self.count_non_transparent()
        )
    }
}
