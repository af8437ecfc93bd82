// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod hex_color_parser;
pub mod rgb_color;
pub mod rgba_color;

// Re-export.
pub use hex_color_parser::*;
pub use rgb_color::*;
pub use rgba_color::*;
