// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Typed errors for every operation of the paint engine. They derive both
//! [`thiserror::Error`] and [`miette::Diagnostic`], so a caller can either `match` on
//! them, or bubble them up into a [`miette::Report`] with `?` and get a pretty report.
//!
//! | Condition                          | Variant                                     |
//! | ---------------------------------- | ------------------------------------------- |
//! | Delete the last remaining layer    | [`CanvasError::LastLayerProtected`]         |
//! | Unknown layer id                   | [`CanvasError::LayerNotFound`]              |
//! | Every layer id has been handed out | [`CanvasError::LayerIdsExhausted`]          |
//! | Project file can't be parsed       | [`CanvasError::MalformedProject`]           |
//! | Snapshot or layer image is corrupt | [`CanvasError::ImageDecode`]                |
//! | Image is the wrong size            | [`CanvasError::DimensionMismatch`]          |

use crate::{CanvasSize, LayerId};

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("🛑 Can't delete layer {layer_id}, it is the last remaining layer")]
    #[diagnostic(
        code(r3bl_paint::blocked_action),
        help("Add another layer before deleting this one")
    )]
    LastLayerProtected { layer_id: LayerId },

    #[error("🔍 Layer {layer_id} does not exist")]
    #[diagnostic(code(r3bl_paint::layer_not_found))]
    LayerNotFound { layer_id: LayerId },

    #[error("🗂️ No layer ids are left after {last_layer_id}")]
    #[diagnostic(
        code(r3bl_paint::layer_ids_exhausted),
        help("Save the drawing, then renumber its layers in the project file")
    )]
    LayerIdsExhausted { last_layer_id: LayerId },

    #[error("✏️ Layer name can't be blank")]
    #[diagnostic(code(r3bl_paint::invalid_layer_name))]
    InvalidLayerName,

    #[error("🖌️ Brush width must be a positive integer, got {brush_width}")]
    #[diagnostic(code(r3bl_paint::invalid_brush_width))]
    InvalidBrushWidth { brush_width: u32 },

    #[error("⚙️ Invalid configuration: {reason}")]
    #[diagnostic(code(r3bl_paint::invalid_config))]
    InvalidConfig { reason: String },

    #[error("🖼️ Could not encode layer pixels: {reason}")]
    #[diagnostic(code(r3bl_paint::image_encode))]
    ImageEncode { reason: String },

    #[error("🖼️ Could not decode layer pixels: {reason}")]
    #[diagnostic(code(r3bl_paint::image_decode))]
    ImageDecode { reason: String },

    #[error("📐 Image is {actual}, expected {expected}")]
    #[diagnostic(code(r3bl_paint::dimension_mismatch))]
    DimensionMismatch {
        expected: CanvasSize,
        actual: CanvasSize,
    },

    #[error("📄 Malformed project file: {reason}")]
    #[diagnostic(
        code(r3bl_paint::malformed_project),
        help("The current canvas was left untouched")
    )]
    MalformedProject { reason: String },

    #[error("📄 Unsupported project version {found}, expected {expected}")]
    #[diagnostic(code(r3bl_paint::unsupported_project_version))]
    UnsupportedProjectVersion { found: u32, expected: u32 },
}

impl CanvasError {
    /// Refused operations leave state untouched and are expected in normal use (eg: the
    /// user clicks delete on the only layer). Everything else is a real failure.
    #[must_use]
    pub fn is_blocked_action(&self) -> bool {
        matches!(self, CanvasError::LastLayerProtected { .. })
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        CanvasError::MalformedProject {
            reason: reason.into(),
        }
    }
}
