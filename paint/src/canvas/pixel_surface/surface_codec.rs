// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lossless snapshots of a [`PixelSurface`]. The bytes are an RGBA8 PNG, so
//! `decode(encode(surface))` is pixel for pixel identical to `surface`, and the same
//! bytes can be embedded in a project file.

use std::{fmt::{self, Debug},
          io::Cursor};

use image::ImageFormat;

#[allow(clippy::wildcard_imports)]
use super::*;
use crate::{CanvasError, CanvasSize, height, width};

/// PNG bytes of one surface. Immutable once created.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedImage(Vec<u8>);

impl EncodedImage {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<Vec<u8>> for EncodedImage {
    fn from(bytes: Vec<u8>) -> Self { Self(bytes) }
}

impl Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedImage [{} bytes]", self.len())
    }
}

impl PixelSurface {
    /// # Errors
    ///
    /// [`CanvasError::ImageEncode`] if the PNG encoder fails, which does not happen for
    /// an in memory buffer of a valid size.
    pub fn encode(&self) -> Result<EncodedImage, CanvasError> {
        let mut bytes = Vec::new();
        self.as_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|error| CanvasError::ImageEncode {
                reason: error.to_string(),
            })?;
        Ok(EncodedImage(bytes))
    }

    /// Decode PNG bytes of any size. Other PNG color types (grayscale, RGB, 16 bit) are
    /// converted to RGBA8.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ImageDecode`] if the bytes are not a PNG.
    pub fn decode_any_size(bytes: &[u8]) -> Result<PixelSurface, CanvasError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|error| CanvasError::ImageDecode {
                reason: error.to_string(),
            })?;
        Ok(PixelSurface::from_image(image.into_rgba8()))
    }

    /// Decode a snapshot that must be exactly `expected` in size.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::ImageDecode`] if the bytes are not a PNG.
    /// - [`CanvasError::DimensionMismatch`] if the PNG is some other size.
    pub fn decode(
        expected: CanvasSize,
        encoded: &EncodedImage,
    ) -> Result<PixelSurface, CanvasError> {
        let surface = Self::decode_any_size(encoded.as_bytes())?;
        let actual = surface.size();
        if actual != expected {
            return Err(CanvasError::DimensionMismatch { expected, actual });
        }
        Ok(surface)
    }
}

/// The size stored in a PNG header, without decoding the pixels.
///
/// # Errors
///
/// [`CanvasError::ImageDecode`] if the bytes are not a PNG.
pub fn peek_encoded_size(bytes: &[u8]) -> Result<CanvasSize, CanvasError> {
    let reader = image::ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png);
    let (w, h) = reader
        .into_dimensions()
        .map_err(|error| CanvasError::ImageDecode {
            reason: error.to_string(),
        })?;
    Ok(width(w) + height(h))
}
