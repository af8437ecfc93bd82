// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structural edits of a [`LayerStack`]: add, delete, select, show/hide, reorder and
//! rename. None of these touch pixels except [`LayerStack::add_layer`], which creates a
//! new surface.

#[allow(clippy::wildcard_imports)]
use super::*;
use crate::{CanvasError, DEBUG_PAINT_LAYER_STACK, PixelSurface, RgbColor,
            canvas_size_problem};

/// Direction for [`LayerStack::move_layer`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum LayerMove {
    /// Toward the top, drawn later.
    Up,
    /// Toward the bottom, drawn earlier.
    Down,
}

impl LayerStack {
    /// Put a new layer on top and make it active. The very first layer of a stack is
    /// filled opaque white, every other layer starts out fully transparent.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidConfig`] if the canvas size is zero or too large to
    ///   allocate.
    /// - [`CanvasError::LayerIdsExhausted`] if `next_layer_id` has no successor, or is
    ///   already taken.
    ///
    /// Nothing changes on error.
    pub fn add_layer(&mut self, name: impl Into<String>) -> Result<LayerId, CanvasError> {
        if let Some(reason) = canvas_size_problem(self.canvas_size) {
            return Err(CanvasError::InvalidConfig { reason });
        }
        let id = self.next_layer_id;
        let next_id = match id.next() {
            Some(it) if !self.contains(id) => it,
            _ => return Err(CanvasError::LayerIdsExhausted { last_layer_id: id }),
        };
        self.next_layer_id = next_id;

        let surface = if self.is_empty() {
            PixelSurface::new_opaque(self.canvas_size, RgbColor::WHITE)
        } else {
            PixelSurface::new_transparent(self.canvas_size)
        };
        let layer = Layer::new(id, name, surface);

        DEBUG_PAINT_LAYER_STACK.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🗂️ Add layer",
                layer_id = %id,
                name = %layer.name,
            );
        });

        self.paint_order.push(id);
        self.arena.insert(id, layer);
        self.active_layer_id = Some(id);
        Ok(id)
    }

    /// Remove a layer. When the active layer is removed, the layer that was just below
    /// it becomes active (or the new bottom layer if it was the bottom).
    ///
    /// # Errors
    ///
    /// - [`CanvasError::LastLayerProtected`] if this is the only layer. Nothing changes.
    /// - [`CanvasError::LayerNotFound`] if there is no such layer.
    pub fn delete_layer(&mut self, id: LayerId) -> Result<(), CanvasError> {
        let index = self
            .index_of(id)
            .ok_or(CanvasError::LayerNotFound { layer_id: id })?;
        if self.len() == 1 {
            return Err(CanvasError::LastLayerProtected { layer_id: id });
        }

        self.paint_order.remove(index);
        self.arena.remove(&id);

        if self.active_layer_id == Some(id) {
            let below = index.saturating_sub(1);
            self.active_layer_id = self.paint_order.get(below).copied();
        }

        DEBUG_PAINT_LAYER_STACK.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🗂️ Delete layer",
                layer_id = %id,
                active_layer_id = ?self.active_layer_id,
            );
        });

        Ok(())
    }

    /// # Errors
    ///
    /// [`CanvasError::LayerNotFound`] if there is no such layer.
    pub fn set_active(&mut self, id: LayerId) -> Result<(), CanvasError> {
        self.try_get(id)?;
        self.active_layer_id = Some(id);
        Ok(())
    }

    /// Flip visibility and return the new value.
    ///
    /// # Errors
    ///
    /// [`CanvasError::LayerNotFound`] if there is no such layer.
    pub fn toggle_visible(&mut self, id: LayerId) -> Result<bool, CanvasError> {
        let layer = self.try_get_mut(id)?;
        layer.visible = !layer.visible;
        Ok(layer.visible)
    }

    /// Swap a layer with its neighbor in paint order. Returns `false` (and changes
    /// nothing) if it is already at the top or bottom.
    ///
    /// # Errors
    ///
    /// [`CanvasError::LayerNotFound`] if there is no such layer.
    pub fn move_layer(
        &mut self,
        id: LayerId,
        direction: LayerMove,
    ) -> Result<bool, CanvasError> {
        let index = self
            .index_of(id)
            .ok_or(CanvasError::LayerNotFound { layer_id: id })?;
        let other = match direction {
            LayerMove::Up => index + 1,
            LayerMove::Down => match index.checked_sub(1) {
                Some(it) => it,
                None => return Ok(false),
            },
        };
        if other >= self.len() {
            return Ok(false);
        }
        self.paint_order.swap(index, other);
        Ok(true)
    }

    /// # Errors
    ///
    /// - [`CanvasError::InvalidLayerName`] if `name` is blank.
    /// - [`CanvasError::LayerNotFound`] if there is no such layer.
    pub fn rename_layer(
        &mut self,
        id: LayerId,
        name: impl Into<String>,
    ) -> Result<(), CanvasError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(CanvasError::InvalidLayerName);
        }
        self.try_get_mut(id)?.name = name.to_string();
        Ok(())
    }
}
