// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`PaintConfig`] holds the knobs a [`crate::PaintSession`] is created with. It can be
//! built in code with the `with_*` methods, or read from JSON. Missing JSON fields fall
//! back to the defaults.
//!
//! ```
//! use r3bl_paint::{DialectKind, PaintConfig, height, width};
//!
//! let config = PaintConfig::try_from_json_str(
//!     r#"{ "canvasSize": { "width": 16, "height": 8 }, "dialect": "p5-js" }"#,
//! )
//! .unwrap();
//! assert_eq!(config.canvas_size, width(16) + height(8));
//! assert_eq!(config.max_history, 20);
//! assert_eq!(config.dialect, DialectKind::P5Js);
//! ```
//!
//! The starting draw color is a `#rrggbb` string:
//!
//! ```json
//! { "initialColor": "#ff8000" }
//! ```

use serde::{Deserialize, Serialize};

use crate::{CanvasError, CanvasSize, DEFAULT_MAX_HISTORY, DialectKind, RgbColor, height,
            width};

pub const DEFAULT_CANVAS_SIDE: u32 = 64;

/// Largest canvas width and height. One RGBA layer of this size takes 64 MiB, and the
/// session holds a few of them (layers, composite, decoded snapshots).
pub const MAX_CANVAS_SIDE: u32 = 4096;

/// Why no drawing can have this size, or [None] if it is fine.
pub(crate) fn canvas_size_problem(canvas_size: CanvasSize) -> Option<String> {
    if canvas_size.is_empty() {
        return Some(format!("canvas size {canvas_size} has a zero dimension"));
    }
    if *canvas_size.width > MAX_CANVAS_SIDE || *canvas_size.height > MAX_CANVAS_SIDE {
        return Some(format!(
            "canvas size {canvas_size} is larger than {MAX_CANVAS_SIDE}x{MAX_CANVAS_SIDE}"
        ));
    }
    None
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaintConfig {
    pub canvas_size: CanvasSize,
    /// Most snapshots the undo history keeps.
    pub max_history: usize,
    /// Output language of [`crate::PaintSession::generate_code`].
    pub dialect: DialectKind,
    /// Draw color of a new session.
    pub initial_color: RgbColor,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_size: width(DEFAULT_CANVAS_SIDE) + height(DEFAULT_CANVAS_SIDE),
            max_history: DEFAULT_MAX_HISTORY,
            dialect: DialectKind::default(),
            initial_color: RgbColor::BLACK,
        }
    }
}

impl PaintConfig {
    #[must_use]
    pub fn with_canvas_size(mut self, canvas_size: impl Into<CanvasSize>) -> Self {
        self.canvas_size = canvas_size.into();
        self
    }

    #[must_use]
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    #[must_use]
    pub fn with_initial_color(mut self, initial_color: RgbColor) -> Self {
        self.initial_color = initial_color;
        self
    }

    /// # Errors
    ///
    /// [`CanvasError::InvalidConfig`] if a dimension is zero or above
    /// [`MAX_CANVAS_SIDE`], or the history size is zero.
    pub fn validate(&self) -> Result<(), CanvasError> {
        if let Some(reason) = canvas_size_problem(self.canvas_size) {
            return Err(CanvasError::InvalidConfig { reason });
        }
        if self.max_history == 0 {
            return Err(CanvasError::InvalidConfig {
                reason: "max history must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidConfig`] if the JSON can't be parsed or the values are not
    /// valid.
    pub fn try_from_json_str(json: &str) -> Result<Self, CanvasError> {
        let config: PaintConfig =
            serde_json::from_str(json).map_err(|error| CanvasError::InvalidConfig {
                reason: error.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }
}
