// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BrushShape, CanvasPos, LayerId, PaintMode, RgbColor, RgbaColor, StrokeStyle};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Tool {
    #[default]
    Paint,
    Erase,
    /// Pick the composited color under the pointer and make it the draw color.
    ColorSample,
}

/// Transient tool and stroke state. Never saved with a project.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawState {
    pub tool: Tool,
    pub color: RgbColor,
    /// Always positive.
    pub(crate) brush_width: u32,
    pub brush_shape: BrushShape,
    pub(crate) last_pointer_pos: Option<CanvasPos>,
    /// The layer the current stroke paints on, [None] between strokes.
    pub(crate) stroke_layer_id: Option<LayerId>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            tool: Tool::Paint,
            color: RgbColor::BLACK,
            brush_width: 1,
            brush_shape: BrushShape::Round,
            last_pointer_pos: None,
            stroke_layer_id: None,
        }
    }
}

impl DrawState {
    /// Default tools, drawing in `color`.
    #[must_use]
    pub fn with_color(color: RgbColor) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn brush_width(&self) -> u32 { self.brush_width }

    #[must_use]
    pub fn last_pointer_pos(&self) -> Option<CanvasPos> { self.last_pointer_pos }

    #[must_use]
    pub fn is_stroke_in_progress(&self) -> bool { self.stroke_layer_id.is_some() }

    /// The style a stroke with the current tool paints with.
    #[must_use]
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: RgbaColor::opaque(self.color),
            brush_width: self.brush_width,
            shape: self.brush_shape,
            mode: match self.tool {
                Tool::Erase => PaintMode::Erase,
                Tool::Paint | Tool::ColorSample => PaintMode::Normal,
            },
        }
    }

    pub(crate) fn start_stroke(&mut self, layer_id: LayerId, pos: CanvasPos) {
        self.stroke_layer_id = Some(layer_id);
        self.last_pointer_pos = Some(pos);
    }

    /// Returns the layer the stroke was on, if there was a stroke.
    pub(crate) fn end_stroke(&mut self) -> Option<LayerId> {
        self.last_pointer_pos = None;
        self.stroke_layer_id.take()
    }
}
