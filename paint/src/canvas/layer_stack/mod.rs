// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod layer;
pub mod layer_id;
pub mod layer_stack_compositor;
pub mod layer_stack_core;
pub mod layer_stack_ops;

// Re-export.
pub use layer::*;
pub use layer_id::*;
pub use layer_stack_core::*;
pub use layer_stack_ops::*;
