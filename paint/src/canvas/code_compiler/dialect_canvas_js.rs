// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CodeDialect, DrawStatement};

/// Plain browser JavaScript using a 2D canvas context.
///
/// ```text
/// const canvas = document.createElement("canvas");
/// canvas.width = 3;
/// canvas.height = 1;
/// const ctx = canvas.getContext("2d");
/// ctx.fillStyle = "#ff0000";
/// ctx.fillRect(0, 0, 1, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasJsDialect;

impl CodeDialect for CanvasJsDialect {
    fn render(&self, statement: &DrawStatement) -> String {
        match statement {
            DrawStatement::Canvas(size) => [
                "const canvas = document.createElement(\"canvas\");".to_string(),
                format!("canvas.width = {};", *size.width),
                format!("canvas.height = {};", *size.height),
                "const ctx = canvas.getContext(\"2d\");".to_string(),
            ]
            .join("\n"),
            DrawStatement::SetFill(color) => {
                format!("ctx.fillStyle = \"{}\";", color.to_hex_string())
            }
            DrawStatement::UnitRect { x, y } => format!("ctx.fillRect({x}, {y}, 1, 1);"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RgbColor, assert_eq2, height, width};

    #[test]
    fn test_render() {
        let dialect = CanvasJsDialect;
        assert_eq2!(
            dialect.render(&DrawStatement::Canvas(width(3) + height(1))),
            "const canvas = document.createElement(\"canvas\");\n\
             canvas.width = 3;\n\
             canvas.height = 1;\n\
             const ctx = canvas.getContext(\"2d\");"
        );
        assert_eq2!(
            dialect.render(&DrawStatement::SetFill(RgbColor::from_u8(255, 0, 16))),
            "ctx.fillStyle = \"#ff0010\";"
        );
        assert_eq2!(
            dialect.render(&DrawStatement::UnitRect { x: 4, y: 7 }),
            "ctx.fillRect(4, 7, 1, 1);"
        );
    }
}
