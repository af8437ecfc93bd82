// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`PaintSession`] ties the pieces together. There is no global state: a front end
//! creates one session and passes it (as `&mut`) to everything that edits the drawing.
//!
//! ```text
//! InputEvent ─dispatch─▶ DrawState ─paint_segment─▶ LayerStack (active layer)
//!                                                      │ stroke end
//!                                                      ▼
//!                             undo ◀──────────── HistoryLog (snapshots)
//!
//! generate_code: LayerStack::composite_visible ─▶ compile ─▶ CompiledProgram
//! ```
//!
//! Every operation runs to completion inside one `&mut self` borrow. This is what keeps
//! a stroke from touching a layer while an undo is restoring it.

use image::RgbaImage;

use crate::{BACKGROUND_LAYER_NAME, CanvasError, CodeDialect, CompiledProgram,
            DEBUG_PAINT_SESSION, DrawState, HistoryLog, Layer, LayerId, LayerStack,
            PaintConfig, UndoOutcome, compile};

#[derive(Debug)]
pub struct PaintSession {
    pub(crate) config: PaintConfig,
    pub(crate) stack: LayerStack,
    pub(crate) history: HistoryLog,
    pub(crate) draw_state: DrawState,
}

impl PaintSession {
    /// A session with one opaque white background layer, whose baseline snapshot is
    /// already recorded.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: PaintConfig) -> Result<Self, CanvasError> {
        config.validate()?;

        let mut stack = LayerStack::new(config.canvas_size);
        let background = stack.add_layer(BACKGROUND_LAYER_NAME)?;
        let mut history = HistoryLog::new(config.max_history);
        history.record(&stack, background)?;

        DEBUG_PAINT_SESSION.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "🎨 New paint session", config = ?config);
        });

        Ok(Self {
            config,
            stack,
            history,
            draw_state: DrawState::with_color(config.initial_color),
        })
    }

    #[must_use]
    pub fn config(&self) -> &PaintConfig { &self.config }

    #[must_use]
    pub fn layer_stack(&self) -> &LayerStack { &self.stack }

    #[must_use]
    pub fn history(&self) -> &HistoryLog { &self.history }

    #[must_use]
    pub fn draw_state(&self) -> &DrawState { &self.draw_state }

    /// The active layer. A session always has at least one layer, so this is [None]
    /// only if that invariant was broken.
    #[must_use]
    pub fn active_layer_id(&self) -> Option<LayerId> { self.stack.active_layer_id() }

    /// For a layer panel, top layer first.
    #[must_use]
    pub fn layers_top_first(&self) -> Vec<&Layer> { self.stack.layers_top_first() }

    /// What the canvas shows right now.
    #[must_use]
    pub fn composite(&self) -> RgbaImage { self.stack.composite_visible() }

    /// Compile the visible layers with the dialect from the config.
    #[must_use]
    pub fn generate_code(&self) -> CompiledProgram {
        self.generate_code_with(self.config.dialect.dialect())
    }

    #[must_use]
    pub fn generate_code_with(&self, dialect: &dyn CodeDialect) -> CompiledProgram {
        compile(&self.composite(), dialect)
    }

    /// Add a transparent layer on top, make it active, and record its baseline so that
    /// the first stroke on it can be undone.
    ///
    /// # Errors
    ///
    /// - [`CanvasError::LayerIdsExhausted`] if no layer id is left. Nothing changes.
    /// - [`CanvasError::ImageEncode`] if the baseline can't be recorded.
    pub fn add_layer(&mut self, name: Option<String>) -> Result<LayerId, CanvasError> {
        let id = self.stack.next_layer_id();
        let name = match name {
            Some(it) if !it.trim().is_empty() => it.trim().to_string(),
            _ => format!("Layer {id}"),
        };
        let id = self.stack.add_layer(name)?;
        self.history.record(&self.stack, id)?;
        Ok(id)
    }

    /// Make the active layer fully transparent, and record it like a stroke.
    ///
    /// # Errors
    ///
    /// [`CanvasError::LayerNotFound`] if there is no active layer.
    pub fn clear_active_layer(&mut self) -> Result<LayerId, CanvasError> {
        let id = self.require_active_layer_id()?;
        self.stack.surface_mut(id)?.clear();
        self.history.record(&self.stack, id)?;
        Ok(id)
    }

    /// # Errors
    ///
    /// See [`HistoryLog::undo`].
    pub fn undo(&mut self) -> Result<UndoOutcome, CanvasError> {
        self.history.undo(&mut self.stack)
    }

    pub(crate) fn require_active_layer_id(&self) -> Result<LayerId, CanvasError> {
        self.stack
            .active_layer_id()
            .ok_or(CanvasError::LayerNotFound {
                layer_id: LayerId::default(),
            })
    }
}

#[cfg(test)]
mod tests_session_core {
    use super::*;
    use crate::{DialectKind, RgbColor, RgbaColor, Tool, assert_eq2, height, width};

    fn create_session() -> PaintSession {
        PaintSession::new(PaintConfig::default().with_canvas_size(width(3) + height(2)))
            .unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = create_session();
        let layers = session.layers_top_first();
        assert_eq2!(layers.len(), 1);
        assert_eq2!(layers[0].name(), BACKGROUND_LAYER_NAME);
        assert_eq2!(
            layers[0].surface().get_pixel(2, 1),
            Some(RgbaColor::OPAQUE_WHITE)
        );
        assert_eq2!(session.active_layer_id(), Some(LayerId(1)));
        assert_eq2!(session.history().len(), 1);
        assert_eq2!(session.draw_state(), &DrawState::default());
    }

    #[test]
    fn test_new_session_rejects_bad_config() {
        let result = PaintSession::new(PaintConfig::default().with_max_history(0));
        assert!(matches!(result, Err(CanvasError::InvalidConfig { .. })));

        let result = PaintSession::new(
            PaintConfig::default().with_canvas_size(width(u32::MAX) + height(u32::MAX)),
        );
        assert!(matches!(result, Err(CanvasError::InvalidConfig { .. })));
    }

    #[test]
    fn test_new_session_draws_in_initial_color() {
        let config = PaintConfig::try_from_json_str(
            r##"{ "canvasSize": { "width": 2, "height": 2 }, "initialColor": "#0a141e" }"##,
        )
        .unwrap();
        let session = PaintSession::new(config).unwrap();
        assert_eq2!(session.draw_state().color, RgbColor::from_u8(10, 20, 30));
        assert_eq2!(session.draw_state().tool, Tool::Paint);
    }

    #[test]
    fn test_add_layer_names() {
        let mut session = create_session();
        let id = session.add_layer(None).unwrap();
        assert_eq2!(session.layer_stack().get(id).unwrap().name(), "Layer 2");
        let id = session.add_layer(Some("  ".to_string())).unwrap();
        assert_eq2!(session.layer_stack().get(id).unwrap().name(), "Layer 3");
        let id = session.add_layer(Some("Ink".to_string())).unwrap();
        assert_eq2!(session.layer_stack().get(id).unwrap().name(), "Ink");
        assert_eq2!(session.history().len(), 4);
    }

    #[test]
    fn test_clear_active_layer_is_undoable() {
        let mut session = create_session();
        let id = session.clear_active_layer().unwrap();
        assert_eq2!(
            session.layer_stack().get(id).unwrap().surface().count_non_transparent(),
            0
        );
        assert_eq2!(session.undo(), Ok(UndoOutcome::Restored { layer_id: id }));
        assert_eq2!(
            session.layer_stack().get(id).unwrap().surface().get_pixel(0, 0),
            Some(RgbaColor::OPAQUE_WHITE)
        );
    }

    #[test]
    fn test_generate_code_for_blank_canvas() {
        let session = create_session();
        let program = session.generate_code_with(DialectKind::CanvasJs.dialect());
        assert_eq2!(program.count_rects(), 0);
        assert_eq2!(program.lines().len(), 1);

        // p5.js is the default.
        let program = session.generate_code();
        assert_eq2!(program.to_text(), "createCanvas(3, 2);\nbackground(255);\nnoStroke();");
    }

    #[test]
    fn test_composite_is_canvas_sized() {
        let session = create_session();
        let image = session.composite();
        assert_eq2!(image.dimensions(), (3, 2));
        assert_eq2!(
            RgbaColor::from(*image.get_pixel(0, 0)).rgb(),
            RgbColor::WHITE
        );
    }
}
