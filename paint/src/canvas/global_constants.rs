// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const DEBUG_PAINT_SESSION: bool = true;
pub const DEBUG_PAINT_HISTORY: bool = true;
pub const DEBUG_PAINT_LAYER_STACK: bool = true;
pub const DEBUG_PAINT_PROJECT_FILE: bool = true;

/// Name given to the opaque white layer that every new session starts with.
pub const BACKGROUND_LAYER_NAME: &str = "Background";
