// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod history_cursor;
pub mod history_entry;
pub mod history_log;

// Re-export.
pub use history_cursor::*;
pub use history_entry::*;
pub use history_log::*;
