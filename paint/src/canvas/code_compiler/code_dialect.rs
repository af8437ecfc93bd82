// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::{CanvasJsDialect, DrawStatement, P5JsDialect};

/// Renders [`DrawStatement`]s as source code for one drawing API. A statement may
/// render to more than one line (the canvas header usually does), in which case the
/// lines are joined with `\n`.
///
/// The header must not contain any fill or rectangle statements, so that counting
/// those in the output counts exactly what the compiler emitted.
pub trait CodeDialect: Debug {
    fn render(&self, statement: &DrawStatement) -> String;
}

/// Selects one of the built in [`CodeDialect`]s, from config or the command line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::EnumIter)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DialectKind {
    /// HTML canvas 2D context.
    CanvasJs,
    /// p5.js sketch.
    #[default]
    P5Js,
}

impl DialectKind {
    #[must_use]
    pub fn dialect(self) -> &'static dyn CodeDialect {
        match self {
            DialectKind::CanvasJs => &CanvasJsDialect,
            DialectKind::P5Js => &P5JsDialect,
        }
    }
}
