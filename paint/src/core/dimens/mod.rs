// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod canvas_pos;
pub mod canvas_size;

// Re-export.
pub use canvas_pos::*;
pub use canvas_size::*;
