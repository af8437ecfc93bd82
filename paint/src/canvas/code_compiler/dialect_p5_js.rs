// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CodeDialect, DrawStatement};

/// Body of a p5.js `setup()` function.
///
/// ```text
/// createCanvas(3, 1);
/// background(255);
/// noStroke();
/// fill(255, 0, 0);
/// rect(0, 0, 1, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct P5JsDialect;

impl CodeDialect for P5JsDialect {
    fn render(&self, statement: &DrawStatement) -> String {
        match statement {
            DrawStatement::Canvas(size) => format!(
                "createCanvas({}, {});\nbackground(255);\nnoStroke();",
                *size.width, *size.height
            ),
            DrawStatement::SetFill(color) => {
                format!("fill({}, {}, {});", color.red, color.green, color.blue)
            }
            DrawStatement::UnitRect { x, y } => format!("rect({x}, {y}, 1, 1);"),
        }
    }
}
