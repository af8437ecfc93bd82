// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod surface_blend;
pub mod surface_codec;
pub mod surface_core;
pub mod surface_paint_ops;

// Re-export.
pub use surface_blend::*;
pub use surface_codec::*;
pub use surface_core::*;
pub use surface_paint_ops::*;
