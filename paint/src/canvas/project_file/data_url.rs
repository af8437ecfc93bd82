// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Layer images are embedded in project files as PNG data URLs, which any browser can
//! display as is.
//!
//! ```text
//! data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAA...
//! └──────── prefix ────┘└──── standard base64 ───┘
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::{CanvasError, EncodedImage};

pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[must_use]
pub fn encode_data_url(image: &EncodedImage) -> String {
    format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(image.as_bytes()))
}

/// # Errors
///
/// [`CanvasError::MalformedProject`] if `data_url` is not a base64 PNG data URL. The
/// bytes themselves are not checked here, that happens when they are decoded.
pub fn decode_data_url(data_url: &str) -> Result<EncodedImage, CanvasError> {
    let Some(payload) = data_url.trim().strip_prefix(PNG_DATA_URL_PREFIX) else {
        return Err(CanvasError::malformed(format!(
            "layer image must start with '{PNG_DATA_URL_PREFIX}'"
        )));
    };
    let bytes = STANDARD
        .decode(payload)
        .map_err(|error| CanvasError::malformed(format!("layer image: {error}")))?;
    Ok(EncodedImage::from(bytes))
}
