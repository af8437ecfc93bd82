// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Deref, DerefMut};

use crate::{CanvasSize, RgbColor};

/// Typed form of one line of the compiled program, before a [`crate::CodeDialect`]
/// turns it into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStatement {
    /// Header, sets up a canvas of this size.
    Canvas(CanvasSize),
    /// Select the fill color for the rectangles that follow.
    SetFill(RgbColor),
    /// Fill the 1×1 rectangle at `(x, y)` with the current fill color.
    UnitRect { x: u32, y: u32 },
}

impl DrawStatement {
    #[must_use]
    pub fn is_fill(&self) -> bool { matches!(self, DrawStatement::SetFill(_)) }

    #[must_use]
    pub fn is_rect(&self) -> bool { matches!(self, DrawStatement::UnitRect { .. }) }
}

/// Ordered statements of one program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawStatementVec {
    pub list: Vec<DrawStatement>,
}

impl DrawStatementVec {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, statement: DrawStatement) { self.list.push(statement); }

    #[must_use]
    pub fn count_fills(&self) -> usize { self.list.iter().filter(|it| it.is_fill()).count() }

    #[must_use]
    pub fn count_rects(&self) -> usize { self.list.iter().filter(|it| it.is_rect()).count() }
}

impl Deref for DrawStatementVec {
    type Target = Vec<DrawStatement>;

    fn deref(&self) -> &Self::Target { &self.list }
}

impl DerefMut for DrawStatementVec {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.list }
}
