// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The dispatch table. Each [`InputEvent`] maps to one state transition on the session.
//!
//! | Event                 | Effect                                          | Returns          |
//! | --------------------- | ----------------------------------------------- | ---------------- |
//! | `StrokeStart`         | paint a dab, or sample a color                  | `ConsumedRender` |
//! | `StrokeMove`          | paint from the last position                    | `ConsumedRender` |
//! | `StrokeEnd`           | record the stroked layer                        | `Consumed`       |
//! | tool property changes | update [`DrawState`]                            | `Consumed`       |
//! | `Layer(..)`           | see [`LayerAction`], records when pixels change | `ConsumedRender` |
//! | `Undo`                | [`HistoryLog::undo`]                            | either           |
//!
//! Anything from a non primary button, and stroke moves or ends with no stroke in
//! progress, return [`EventPropagation::Propagate`].
//!
//! [`DrawState`]: crate::DrawState
//! [`HistoryLog::undo`]: crate::HistoryLog::undo

use super::{EventPropagation, InputEvent, LayerAction, PaintSession};
use crate::{CanvasError, CanvasPos, DEBUG_PAINT_SESSION, LayerId, LayerMove, Tool};

impl PaintSession {
    /// Apply one input event.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidBrushWidth`] for a zero brush width.
    /// - [`CanvasError::LastLayerProtected`] when deleting the only layer.
    /// - [`CanvasError::LayerNotFound`] for layer actions on an unknown id.
    /// - [`CanvasError::InvalidLayerName`] when renaming to a blank name.
    ///
    /// State is unchanged when an error is returned.
    pub fn dispatch(
        &mut self,
        event: impl Into<InputEvent>,
    ) -> Result<EventPropagation, CanvasError> {
        let event = event.into();
        let result = match &event {
            InputEvent::StrokeStart { pos, is_primary } => {
                if *is_primary {
                    self.on_stroke_start(*pos)
                } else {
                    Ok(EventPropagation::Propagate)
                }
            }
            InputEvent::StrokeMove { pos, is_primary } => {
                if *is_primary {
                    Ok(self.on_stroke_move(*pos))
                } else {
                    Ok(EventPropagation::Propagate)
                }
            }
            InputEvent::StrokeEnd { is_primary } => {
                if *is_primary {
                    self.on_stroke_end()
                } else {
                    Ok(EventPropagation::Propagate)
                }
            }
            InputEvent::ToolChange(tool) => {
                self.draw_state.tool = *tool;
                Ok(EventPropagation::Consumed)
            }
            InputEvent::ColorChange(color) => {
                self.draw_state.color = *color;
                Ok(EventPropagation::Consumed)
            }
            InputEvent::BrushWidthChange(brush_width) => {
                if *brush_width == 0 {
                    Err(CanvasError::InvalidBrushWidth {
                        brush_width: *brush_width,
                    })
                } else {
                    self.draw_state.brush_width = *brush_width;
                    Ok(EventPropagation::Consumed)
                }
            }
            InputEvent::BrushShapeChange(shape) => {
                self.draw_state.brush_shape = *shape;
                Ok(EventPropagation::Consumed)
            }
            InputEvent::Layer(action) => self.on_layer_action(action.clone()),
            InputEvent::Undo => self.undo().map(|outcome| {
                if outcome.is_restored() {
                    EventPropagation::ConsumedRender
                } else {
                    EventPropagation::Consumed
                }
            }),
        };

        DEBUG_PAINT_SESSION.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🎨 Dispatch input event",
                event = ?event,
                result = ?result,
            );
        });

        result
    }

    fn on_stroke_start(&mut self, pos: CanvasPos) -> Result<EventPropagation, CanvasError> {
        if self.draw_state.tool == Tool::ColorSample {
            let picked = pos
                .to_pixel()
                .and_then(|(x, y)| self.stack.pick_color(x, y));
            return Ok(match picked {
                Some(color) => {
                    self.draw_state.color = color;
                    EventPropagation::Consumed
                }
                None => EventPropagation::Propagate,
            });
        }

        // A stroke that never got its end event is finished first.
        if self.draw_state.is_stroke_in_progress() {
            self.on_stroke_end()?;
        }

        let layer_id = self.require_active_layer_id()?;
        let style = self.draw_state.stroke_style();
        self.stack
            .surface_mut(layer_id)?
            .paint_segment(pos, pos, &style);
        self.draw_state.start_stroke(layer_id, pos);
        Ok(EventPropagation::ConsumedRender)
    }

    fn on_stroke_move(&mut self, pos: CanvasPos) -> EventPropagation {
        let (Some(layer_id), Some(last_pos)) = (
            self.draw_state.stroke_layer_id,
            self.draw_state.last_pointer_pos,
        ) else {
            return EventPropagation::Propagate;
        };
        let style = self.draw_state.stroke_style();
        match self.stack.surface_mut(layer_id) {
            Ok(surface) => {
                surface.paint_segment(last_pos, pos, &style);
                self.draw_state.last_pointer_pos = Some(pos);
                EventPropagation::ConsumedRender
            }
            // The layer went away mid stroke.
            Err(_) => {
                self.draw_state.end_stroke();
                EventPropagation::Propagate
            }
        }
    }

    fn on_stroke_end(&mut self) -> Result<EventPropagation, CanvasError> {
        let Some(layer_id) = self.draw_state.end_stroke() else {
            return Ok(EventPropagation::Propagate);
        };
        if !self.stack.contains(layer_id) {
            return Ok(EventPropagation::Propagate);
        }
        self.history.record(&self.stack, layer_id)?;
        Ok(EventPropagation::Consumed)
    }

    fn on_layer_action(
        &mut self,
        action: LayerAction,
    ) -> Result<EventPropagation, CanvasError> {
        match action {
            LayerAction::Add { name } => {
                self.add_layer(name)?;
            }
            LayerAction::Delete(id) => self.stack.delete_layer(id)?,
            LayerAction::SetActive(id) => self.stack.set_active(id)?,
            LayerAction::ToggleVisible(id) => {
                self.stack.toggle_visible(id)?;
            }
            LayerAction::MoveUp(id) => return self.on_move_layer(id, LayerMove::Up),
            LayerAction::MoveDown(id) => return self.on_move_layer(id, LayerMove::Down),
            LayerAction::Rename(id, name) => self.stack.rename_layer(id, name)?,
            LayerAction::ClearActive => {
                self.clear_active_layer()?;
            }
        }
        Ok(EventPropagation::ConsumedRender)
    }

    fn on_move_layer(
        &mut self,
        id: LayerId,
        direction: LayerMove,
    ) -> Result<EventPropagation, CanvasError> {
        Ok(if self.stack.move_layer(id, direction)? {
            EventPropagation::ConsumedRender
        } else {
            EventPropagation::Consumed
        })
    }
}
