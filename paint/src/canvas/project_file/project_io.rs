// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Saving and loading project files. The free functions move a [`ProjectRecord`]
//! to and from disk. The [`PaintSession`] methods convert between a session and a
//! record.
//!
//! Loading is all or nothing: a session that fails to load a project keeps its
//! layers, history, and config exactly as they were.

use std::path::Path;

use miette::{Context, IntoDiagnostic};

use super::ProjectRecord;
use crate::{CanvasError, DEBUG_PAINT_PROJECT_FILE, DrawState, HistoryLog, PaintConfig,
            PaintSession};

pub mod project_file_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum ProjectFileErrorCouldNot {
        #[error("📂 Could not read project file: '{path}'")]
        ReadProjectFile { path: String },

        #[error("💾 Could not write project file: '{path}'")]
        WriteProjectFile { path: String },

        #[error("🧾 Could not parse project file: '{path}'")]
        ParseProjectFile { path: String },

        #[error("🧾 Could not serialize project")]
        SerializeProject,

        #[error("🖼️ Could not load project into session")]
        LoadProjectIntoSession,
    }
}
use project_file_error::ProjectFileErrorCouldNot;

/// # Errors
///
/// Returns an error if:
/// - The file can't be read
/// - The contents are not a project record
#[tracing::instrument]
pub fn read_project_record(path: &Path) -> miette::Result<ProjectRecord> {
    let path_str = path.display().to_string();

    let json = std::fs::read_to_string(path).into_diagnostic().wrap_err(
        ProjectFileErrorCouldNot::ReadProjectFile {
            path: path_str.clone(),
        },
    )?;

    let record = ProjectRecord::try_from_json_str(&json)
        .into_diagnostic()
        .wrap_err(ProjectFileErrorCouldNot::ParseProjectFile {
            path: path_str.clone(),
        })?;

    DEBUG_PAINT_PROJECT_FILE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📂 Read project file",
            path = %path_str,
            layers = %record.layers.len(),
        );
    });

    Ok(record)
}

/// # Errors
///
/// Returns an error if the file can't be written.
#[tracing::instrument(skip(record))]
pub fn write_project_record(path: &Path, record: &ProjectRecord) -> miette::Result<()> {
    let path_str = path.display().to_string();

    let json = record
        .try_to_json_string()
        .into_diagnostic()
        .wrap_err(ProjectFileErrorCouldNot::SerializeProject)?;

    std::fs::write(path, json).into_diagnostic().wrap_err(
        ProjectFileErrorCouldNot::WriteProjectFile {
            path: path_str.clone(),
        },
    )?;

    DEBUG_PAINT_PROJECT_FILE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "💾 Wrote project file",
            path = %path_str,
            layers = %record.layers.len(),
        );
    });

    Ok(())
}

impl PaintSession {
    /// # Errors
    ///
    /// [`CanvasError::ImageEncode`] if a layer can't be encoded.
    pub fn to_project_record(&self) -> Result<ProjectRecord, CanvasError> {
        ProjectRecord::try_from_layer_stack(&self.stack)
    }

    /// A session showing `record`, with `config`'s history size and dialect. The canvas
    /// size comes from the record.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::InvalidConfig`] if `config` does not validate.
    /// - See [`ProjectRecord::try_to_layer_stack`].
    pub fn from_project_record(
        config: PaintConfig,
        record: &ProjectRecord,
    ) -> Result<Self, CanvasError> {
        config.validate()?;
        let stack = record.try_to_layer_stack()?;
        let mut history = HistoryLog::new(config.max_history);
        history.reset_to_baselines(&stack)?;

        Ok(Self {
            config: config.with_canvas_size(stack.canvas_size()),
            stack,
            history,
            draw_state: DrawState::with_color(config.initial_color),
        })
    }

    /// Replace the drawing with `record`. The history restarts with one baseline per
    /// layer, and any stroke in progress is dropped. Tool, color, and brush settings are
    /// kept.
    ///
    /// # Errors
    ///
    /// See [`ProjectRecord::try_to_layer_stack`]. The session is unchanged on error.
    pub fn load_project_record(&mut self, record: &ProjectRecord) -> Result<(), CanvasError> {
        let stack = record.try_to_layer_stack()?;
        let mut history = HistoryLog::new(self.config.max_history);
        history.reset_to_baselines(&stack)?;

        self.config.canvas_size = stack.canvas_size();
        self.stack = stack;
        self.history = history;
        self.draw_state.end_stroke();

        DEBUG_PAINT_PROJECT_FILE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🖼️ Loaded project into session",
                layer_stack = ?self.stack,
                history = ?self.history,
            );
        });

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if a layer can't be encoded, or the file can't be written.
    pub fn save_project(&self, path: &Path) -> miette::Result<()> {
        let record = self
            .to_project_record()
            .into_diagnostic()
            .wrap_err(ProjectFileErrorCouldNot::SerializeProject)?;
        write_project_record(path, &record)
    }

    /// # Errors
    ///
    /// Returns an error if the file can't be read or is not a valid project. The
    /// session is unchanged on error.
    pub fn load_project(&mut self, path: &Path) -> miette::Result<()> {
        let record = read_project_record(path)?;
        self.load_project_record(&record)
            .into_diagnostic()
            .wrap_err(ProjectFileErrorCouldNot::LoadProjectIntoSession)
    }
}
