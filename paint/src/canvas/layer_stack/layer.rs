// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::LayerId;
use crate::PixelSurface;

/// One independently editable raster, owned by the [`crate::LayerStack`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub(crate) id: LayerId,
    pub(crate) name: String,
    pub(crate) visible: bool,
    pub(crate) surface: PixelSurface,
}

impl Layer {
    #[must_use]
    pub fn new(id: LayerId, name: impl Into<String>, surface: PixelSurface) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            surface,
        }
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn id(&self) -> LayerId { self.id }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub fn is_visible(&self) -> bool { self.visible }

    #[must_use]
    pub fn surface(&self) -> &PixelSurface { &self.surface }
}
