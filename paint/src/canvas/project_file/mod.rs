// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod data_url;
pub mod project_io;
pub mod project_record;

// Re-export.
pub use data_url::*;
pub use project_io::*;
pub use project_record::*;
