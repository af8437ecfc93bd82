// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::{CodeDialect, DrawStatementVec};

/// Output of one compile. It is built from scratch every time and never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    statements: DrawStatementVec,
    lines: Vec<String>,
}

impl CompiledProgram {
    /// Render every statement with `dialect`.
    #[must_use]
    pub fn new(statements: DrawStatementVec, dialect: &dyn CodeDialect) -> Self {
        let lines = statements.iter().map(|it| dialect.render(it)).collect();
        Self { statements, lines }
    }

    #[must_use]
    pub fn statements(&self) -> &DrawStatementVec { &self.statements }

    /// One rendered string per statement, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] { &self.lines }

    /// Number of fill color statements.
    #[must_use]
    pub fn count_fills(&self) -> usize { self.statements.count_fills() }

    /// Number of unit rectangle statements, which is the number of ink pixels.
    #[must_use]
    pub fn count_rects(&self) -> usize { self.statements.count_rects() }

    /// The program text, statements joined with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String { self.lines.join("\n") }
}

impl Display for CompiledProgram {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.to_text()) }
}
