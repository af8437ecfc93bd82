// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EncodedImage, LayerId};

/// The pixels of one layer at one instant. Immutable once created.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HistoryEntry {
    layer_id: LayerId,
    snapshot: EncodedImage,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(layer_id: LayerId, snapshot: EncodedImage) -> Self {
        Self { layer_id, snapshot }
    }

    #[must_use]
    pub fn layer_id(&self) -> LayerId { self.layer_id }

    #[must_use]
    pub fn snapshot(&self) -> &EncodedImage { &self.snapshot }
}
