// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_paint
//!
//! A layered pixel canvas with a per-layer undo history, and a compiler that turns the
//! flattened canvas into drawing-API source code.
//!
//! The crate is organized in two halves:
//!
//! 1. [`mod@core`]: ambient building blocks (errors, logging, colors, canvas
//!    dimensions, temp dirs).
//! 2. [`mod@canvas`]: the paint engine itself.
//!
//! ```text
//! InputEvent ──dispatch──▶ PaintSession
//!                            ├── LayerStack ── Layer ── PixelSurface (one per layer)
//!                            ├── HistoryLog ── HistoryEntry (layer id + PNG snapshot)
//!                            └── DrawState (tool, color, brush)
//!
//! generate_code():  LayerStack::composite_visible() ──▶ compile() ──▶ CompiledProgram
//! ```
//!
//! # Example
//!
//! ```
//! use r3bl_paint::{CanvasPos, InputEvent, PaintConfig, PaintSession, RgbColor, width,
//!                  height};
//!
//! # fn main() -> Result<(), r3bl_paint::CanvasError> {
//! let config = PaintConfig::default().with_canvas_size(width(2) + height(1));
//! let mut session = PaintSession::new(config)?;
//!
//! session.dispatch(InputEvent::ColorChange(RgbColor::from_u8(255, 0, 0)))?;
//! session.dispatch(InputEvent::StrokeStart {
//!     pos: CanvasPos::new(0.5, 0.5),
//!     is_primary: true,
//! })?;
//! session.dispatch(InputEvent::StrokeEnd { is_primary: true })?;
//!
//! let program = session.generate_code();
//! assert_eq!(program.count_rects(), 1);
//! # Ok(())
//! # }
//! ```

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it). The cfg_attr
// ensures test code within the library can also use .unwrap() freely.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod canvas;
pub mod core;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
#[allow(ambiguous_glob_reexports)]
pub use crate::canvas::*;
#[allow(ambiguous_glob_reexports)]
pub use crate::core::*;
