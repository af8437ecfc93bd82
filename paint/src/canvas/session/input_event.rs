// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BrushShape, CanvasPos, LayerId, RgbColor, Tool};

/// Everything a front end can ask a [`crate::PaintSession`] to do. Pointer positions
/// are in canvas space, see [`CanvasPos`].
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    StrokeStart { pos: CanvasPos, is_primary: bool },
    StrokeMove { pos: CanvasPos, is_primary: bool },
    StrokeEnd { is_primary: bool },
    ToolChange(Tool),
    ColorChange(RgbColor),
    /// Zero is rejected.
    BrushWidthChange(u32),
    BrushShapeChange(BrushShape),
    Layer(LayerAction),
    Undo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerAction {
    /// Named `Layer <id>` when no name is given.
    Add { name: Option<String> },
    Delete(LayerId),
    SetActive(LayerId),
    ToggleVisible(LayerId),
    MoveUp(LayerId),
    MoveDown(LayerId),
    Rename(LayerId, String),
    /// Make the active layer fully transparent. This is recorded like a stroke.
    ClearActive,
}

impl From<LayerAction> for InputEvent {
    fn from(action: LayerAction) -> Self { InputEvent::Layer(action) }
}
