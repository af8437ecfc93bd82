// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use image::Rgba;

use super::RgbColor;

/// Straight (non premultiplied) RGBA color, one byte per channel. This is the pixel type
/// stored in every [`crate::PixelSurface`].
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbaColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl RgbaColor {
    /// Fully transparent. This is what [`crate::PixelSurface::clear`] and erase strokes
    /// leave behind.
    pub const TRANSPARENT: RgbaColor = RgbaColor::new(0, 0, 0, 0);
    pub const OPAQUE_WHITE: RgbaColor = RgbaColor::new(255, 255, 255, 255);

    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn opaque(color: RgbColor) -> Self {
        Self::new(color.red, color.green, color.blue, 255)
    }

    #[must_use]
    pub const fn rgb(&self) -> RgbColor { RgbColor::from_u8(self.red, self.green, self.blue) }

    #[must_use]
    pub const fn is_opaque(&self) -> bool { self.alpha == 255 }

    #[must_use]
    pub const fn is_transparent(&self) -> bool { self.alpha == 0 }
}

impl From<RgbColor> for RgbaColor {
    fn from(color: RgbColor) -> Self { Self::opaque(color) }
}

impl From<Rgba<u8>> for RgbaColor {
    fn from(Rgba([red, green, blue, alpha]): Rgba<u8>) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<RgbaColor> for Rgba<u8> {
    fn from(it: RgbaColor) -> Self { Rgba([it.red, it.green, it.blue, it.alpha]) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_conversions_with_image_rgba() {
        let color = RgbaColor::new(1, 2, 3, 4);
        let pixel: Rgba<u8> = color.into();
        assert_eq2!(pixel, Rgba([1, 2, 3, 4]));
        assert_eq2!(RgbaColor::from(pixel), color);
    }

    #[test]
    fn test_opaque_from_rgb() {
        let color = RgbaColor::from(RgbColor::from_u8(9, 8, 7));
        assert!(color.is_opaque());
        assert_eq2!(color.rgb(), RgbColor::from_u8(9, 8, 7));
        assert!(RgbaColor::TRANSPARENT.is_transparent());
    }
}
