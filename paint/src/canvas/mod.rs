// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod canvas_error;
pub mod code_compiler;
pub mod config;
pub mod global_constants;
pub mod history;
pub mod layer_stack;
pub mod pixel_surface;
pub mod project_file;
pub mod session;

// Re-export.
pub use canvas_error::*;
pub use code_compiler::*;
pub use config::*;
pub use global_constants::*;
pub use history::*;
pub use layer_stack::*;
pub use pixel_surface::*;
pub use project_file::*;
pub use session::*;
