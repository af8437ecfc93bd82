// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn a flattened pixel buffer into drawing API source code.
//!
//! ```text
//! RgbaImage ──compile──▶ DrawStatementVec ──CodeDialect──▶ CompiledProgram (text)
//! ```
//!
//! The scan is row major. Every ink pixel becomes a unit rectangle, and a fill
//! statement is only emitted when the color differs from the last one emitted. That
//! running color carries over from one row to the next.

// Attach sources.
pub mod code_dialect;
pub mod compiled_program;
pub mod compiler_impl;
pub mod dialect_canvas_js;
pub mod dialect_p5_js;
pub mod draw_statement;

// Re-export.
pub use code_dialect::*;
pub use compiled_program::*;
pub use compiler_impl::*;
pub use dialect_canvas_js::*;
pub use dialect_p5_js::*;
pub use draw_statement::*;
