// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod draw_state;
pub mod event_propagation;
pub mod input_event;
pub mod session_core;
pub mod session_dispatch;

// Re-export.
pub use draw_state::*;
pub use event_propagation::*;
pub use input_event::*;
pub use session_core::*;
