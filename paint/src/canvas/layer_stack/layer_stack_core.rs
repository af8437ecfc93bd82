// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`LayerStack`] owns every [`Layer`]. The layers live in an arena keyed by
//! [`LayerId`], and the paint order is kept separately as a list of ids, bottom first.
//!
//! ```text
//! paint_order: [1, 4, 2]          arena: { 1 → Background, 2 → Ink, 4 → Sketch }
//!               ▲     ▲
//!            bottom  top (drawn last, listed first in the UI)
//! ```
//!
//! Invariants:
//! - Every id in `paint_order` is in `arena` and vice versa.
//! - `active_layer_id` is [Some] and names a member whenever the stack is not empty.
//! - `next_layer_id` is greater than every id ever handed out.
//! - Every surface has the same size as the canvas.

use std::fmt::{self, Debug};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::{Layer, LayerId};
use crate::{CanvasError, CanvasSize, PixelSurface};

/// Most drawings have only a handful of layers.
pub const INLINE_LAYER_COUNT: usize = 8;

pub type LayerOrder = SmallVec<[LayerId; INLINE_LAYER_COUNT]>;

#[derive(Clone, PartialEq)]
pub struct LayerStack {
    pub(crate) canvas_size: CanvasSize,
    pub(crate) paint_order: LayerOrder,
    pub(crate) arena: FxHashMap<LayerId, Layer>,
    pub(crate) active_layer_id: Option<LayerId>,
    pub(crate) next_layer_id: LayerId,
}

impl LayerStack {
    /// An empty stack. The first [`Self::add_layer`] creates the opaque white bottom
    /// layer.
    #[must_use]
    pub fn new(canvas_size: CanvasSize) -> Self {
        Self {
            canvas_size,
            paint_order: LayerOrder::new(),
            arena: FxHashMap::default(),
            active_layer_id: None,
            next_layer_id: LayerId::FIRST,
        }
    }

    /// Rebuild a stack from layers given bottom to top. The top layer becomes active.
    /// `next_layer_id` is raised past the largest id if it is too small.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::MalformedProject`] if there are no layers, or an id is zero,
    ///   repeated, or so large that no id is left for a new layer.
    /// - [`CanvasError::DimensionMismatch`] if a surface is not `canvas_size`.
    pub fn try_from_layers(
        canvas_size: CanvasSize,
        layers_bottom_to_top: Vec<Layer>,
        next_layer_id: LayerId,
    ) -> Result<Self, CanvasError> {
        if layers_bottom_to_top.is_empty() {
            return Err(CanvasError::malformed("a project needs at least one layer"));
        }

        let mut it = Self::new(canvas_size);
        for layer in layers_bottom_to_top {
            if !layer.id.is_valid() {
                return Err(CanvasError::malformed("layer ids must be positive"));
            }
            if it.arena.contains_key(&layer.id) {
                return Err(CanvasError::malformed(format!(
                    "layer id {} is used more than once",
                    layer.id
                )));
            }
            if layer.surface.size() != canvas_size {
                return Err(CanvasError::DimensionMismatch {
                    expected: canvas_size,
                    actual: layer.surface.size(),
                });
            }
            it.paint_order.push(layer.id);
            it.arena.insert(layer.id, layer);
        }

        let max_id = it.paint_order.iter().max().copied().unwrap_or_default();
        let Some(after_max_id) = max_id.next() else {
            return Err(CanvasError::malformed(format!(
                "layer id {max_id} leaves no id for a new layer"
            )));
        };
        it.next_layer_id = next_layer_id.max(after_max_id);
        it.active_layer_id = it.paint_order.last().copied();
        Ok(it)
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize { self.canvas_size }

    #[must_use]
    pub fn len(&self) -> usize { self.paint_order.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.paint_order.is_empty() }

    #[must_use]
    pub fn contains(&self, id: LayerId) -> bool { self.arena.contains_key(&id) }

    #[must_use]
    pub fn get(&self, id: LayerId) -> Option<&Layer> { self.arena.get(&id) }

    /// # Errors
    ///
    /// [`CanvasError::LayerNotFound`] if there is no such layer.
    pub fn try_get(&self, id: LayerId) -> Result<&Layer, CanvasError> {
        self.arena
            .get(&id)
            .ok_or(CanvasError::LayerNotFound { layer_id: id })
    }

    pub(crate) fn try_get_mut(&mut self, id: LayerId) -> Result<&mut Layer, CanvasError> {
        self.arena
            .get_mut(&id)
            .ok_or(CanvasError::LayerNotFound { layer_id: id })
    }

    /// Mutable access to the pixels of one layer.
    ///
    /// # Errors
    ///
    /// [`CanvasError::LayerNotFound`] if there is no such layer.
    pub fn surface_mut(&mut self, id: LayerId) -> Result<&mut PixelSurface, CanvasError> {
        Ok(&mut self.try_get_mut(id)?.surface)
    }

    #[must_use]
    pub fn active_layer_id(&self) -> Option<LayerId> { self.active_layer_id }

    #[must_use]
    pub fn active_layer(&self) -> Option<&Layer> {
        self.active_layer_id.and_then(|id| self.arena.get(&id))
    }

    #[must_use]
    pub fn next_layer_id(&self) -> LayerId { self.next_layer_id }

    /// Ids bottom to top.
    #[must_use]
    pub fn paint_order(&self) -> &[LayerId] { &self.paint_order }

    pub fn iter_bottom_to_top(&self) -> impl Iterator<Item = &Layer> {
        self.paint_order.iter().filter_map(|id| self.arena.get(id))
    }

    /// Top layer first, which is how a layer panel lists them.
    #[must_use]
    pub fn layers_top_first(&self) -> Vec<&Layer> {
        self.paint_order
            .iter()
            .rev()
            .filter_map(|id| self.arena.get(id))
            .collect()
    }

    pub(crate) fn index_of(&self, id: LayerId) -> Option<usize> {
        self.paint_order.iter().position(|it| *it == id)
    }
}

impl Debug for LayerStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "LayerStack [canvas: {} | active: {:?} | next id: {}]",
            self.canvas_size, self.active_layer_id, self.next_layer_id
        )?;
        for layer in self.layers_top_first() {
            writeln!(
                f,
                "  {} {:?} {} {:?}",
                layer.id,
                layer.name,
                if layer.visible { "👁" } else { "-" },
                layer.surface
            )?;
        }
        Ok(())
    }
}
