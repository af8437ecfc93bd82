// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Tells the caller of [`crate::PaintSession::dispatch`] whether an event was consumed,
/// and if so whether the canvas or layer panel needs to be drawn again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    /// Pixels or the layer list changed.
    ConsumedRender,
    /// Only tool state or history changed.
    Consumed,
    /// The event was ignored (eg: non primary button, or no stroke in progress).
    Propagate,
}
