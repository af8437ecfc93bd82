// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use image::RgbaImage;

use super::{CodeDialect, CompiledProgram, DrawStatement, DrawStatementVec};
use crate::{CanvasSize, RgbColor, RgbaColor, height, width};

/// A pixel is ink when at least one of its RGB channels is below this. Pixels that are
/// within 5 units of pure white on every channel are treated as background, which
/// absorbs the faint fringe left by soft edges.
pub const INK_CHANNEL_THRESHOLD: u8 = 250;

#[must_use]
pub fn is_ink(color: RgbColor) -> bool {
    color.red < INK_CHANNEL_THRESHOLD
        || color.green < INK_CHANNEL_THRESHOLD
        || color.blue < INK_CHANNEL_THRESHOLD
}

/// Scan `buffer` row major and emit a header, then one unit rectangle per ink pixel,
/// with a fill statement whenever the color changes. Alpha is ignored, the buffer is
/// expected to be a flattened (opaque) composite.
#[must_use]
pub fn compile_to_statements(buffer: &RgbaImage) -> DrawStatementVec {
    let size: CanvasSize = width(buffer.width()) + height(buffer.height());
    let mut statements = DrawStatementVec::new();
    statements.push(DrawStatement::Canvas(size));

    let mut last_fill: Option<RgbColor> = None;
    // `enumerate_pixels` walks rows top to bottom, each row left to right.
    for (x, y, pixel) in buffer.enumerate_pixels() {
        let color = RgbaColor::from(*pixel).rgb();
        if !is_ink(color) {
            continue;
        }
        if last_fill != Some(color) {
            statements.push(DrawStatement::SetFill(color));
            last_fill = Some(color);
        }
        statements.push(DrawStatement::UnitRect { x, y });
    }

    statements
}

/// Compile `buffer` and render it with `dialect`. Same input, byte identical output.
#[must_use]
pub fn compile(buffer: &RgbaImage, dialect: &dyn CodeDialect) -> CompiledProgram {
    CompiledProgram::new(compile_to_statements(buffer), dialect)
}
