// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive a [`PaintSession`] only through its public API, the way a front end would.

use r3bl_paint::{BrushShape, CanvasError, CanvasPos, DialectKind, EventPropagation,
                 InputEvent, LayerAction, LayerId, PaintConfig, PaintSession, RgbColor,
                 RgbaColor, Tool, UndoOutcome, assert_eq2, height, try_create_temp_dir,
                 width};
use serial_test::serial;

fn create_session(w: u32, h: u32) -> PaintSession {
    PaintSession::new(PaintConfig::default().with_canvas_size(width(w) + height(h))).unwrap()
}

fn stroke(session: &mut PaintSession, points: &[(f32, f32)]) {
    let mut it = points.iter().map(|&(x, y)| CanvasPos::new(x, y));
    let Some(first) = it.next() else { return };
    session
        .dispatch(InputEvent::StrokeStart {
            pos: first,
            is_primary: true,
        })
        .unwrap();
    for pos in it {
        session
            .dispatch(InputEvent::StrokeMove {
                pos,
                is_primary: true,
            })
            .unwrap();
    }
    session
        .dispatch(InputEvent::StrokeEnd { is_primary: true })
        .unwrap();
}

fn dab(session: &mut PaintSession, x: u32, y: u32) {
    let center = CanvasPos::pixel_center(x, y);
    stroke(session, &[(center.x, center.y)]);
}

#[test]
fn test_paint_then_undo_restores_transparent_layer() {
    let mut session = create_session(4, 4);
    let ink = match session.dispatch(LayerAction::Add { name: None }) {
        Ok(EventPropagation::ConsumedRender) => session.active_layer_id().unwrap(),
        other => panic!("unexpected {other:?}"),
    };

    stroke(&mut session, &[(0.0, 0.0), (1.0, 0.0)]);
    let surface = session.layer_stack().get(ink).unwrap().surface();
    assert_eq2!(surface.get_pixel(0, 0), Some(RgbaColor::opaque(RgbColor::BLACK)));
    assert_eq2!(surface.count_non_transparent(), 1);

    assert_eq2!(
        session.dispatch(InputEvent::Undo),
        Ok(EventPropagation::ConsumedRender)
    );
    let surface = session.layer_stack().get(ink).unwrap().surface();
    assert_eq2!(surface.count_non_transparent(), 0);
}

#[test]
fn test_paint_then_undo_restores_white_background() {
    let mut session = create_session(4, 4);
    stroke(&mut session, &[(0.0, 0.0), (1.0, 0.0)]);
    assert_eq2!(session.composite().get_pixel(0, 0).0, [0, 0, 0, 255]);

    assert_eq2!(
        session.undo(),
        Ok(UndoOutcome::Restored {
            layer_id: LayerId(1)
        })
    );
    let surface = session.layer_stack().get(LayerId(1)).unwrap().surface();
    assert_eq2!(surface.count_non_transparent(), 16);
    assert_eq2!(surface.sample_color(0, 0), Some(RgbColor::WHITE));
    assert_eq2!(session.undo(), Ok(UndoOutcome::NothingToUndo));
}

#[test]
fn test_generated_code_for_small_drawing() {
    let mut session = create_session(3, 2);
    session
        .dispatch(InputEvent::ColorChange(RgbColor::from_u8(255, 0, 0)))
        .unwrap();
    dab(&mut session, 0, 0);
    dab(&mut session, 1, 0);
    session
        .dispatch(InputEvent::ColorChange(RgbColor::from_u8(0, 0, 255)))
        .unwrap();
    dab(&mut session, 2, 1);

    let program = session.generate_code_with(DialectKind::CanvasJs.dialect());
    assert_eq2!(program.count_fills(), 2);
    assert_eq2!(program.count_rects(), 3);
    assert_eq2!(
        program.to_text(),
        [
            "const canvas = document.createElement(\"canvas\");",
            "canvas.width = 3;",
            "canvas.height = 2;",
            "const ctx = canvas.getContext(\"2d\");",
            "ctx.fillStyle = \"#ff0000\";",
            "ctx.fillRect(0, 0, 1, 1);",
            "ctx.fillRect(1, 0, 1, 1);",
            "ctx.fillStyle = \"#0000ff\";",
            "ctx.fillRect(2, 1, 1, 1);",
        ]
        .join("\n")
    );

    // The default dialect.
    let program = session.generate_code();
    assert_eq2!(
        program.to_text(),
        [
            "createCanvas(3, 2);",
            "background(255);",
            "noStroke();",
            "fill(255, 0, 0);",
            "rect(0, 0, 1, 1);",
            "rect(1, 0, 1, 1);",
            "fill(0, 0, 255);",
            "rect(2, 1, 1, 1);",
        ]
        .join("\n")
    );
}

#[test]
fn test_hidden_layers_are_not_compiled() {
    let mut session = create_session(3, 3);
    session
        .dispatch(LayerAction::Add {
            name: Some("Ink".to_string()),
        })
        .unwrap();
    let ink = session.active_layer_id().unwrap();
    dab(&mut session, 1, 1);
    assert_eq2!(session.generate_code().count_rects(), 1);

    session.dispatch(LayerAction::ToggleVisible(ink)).unwrap();
    assert_eq2!(session.generate_code().count_rects(), 0);

    // Painting still goes to the hidden active layer.
    dab(&mut session, 0, 0);
    assert_eq2!(
        session
            .layer_stack()
            .get(ink)
            .unwrap()
            .surface()
            .count_non_transparent(),
        2
    );
}

#[test]
fn test_layer_order_decides_the_composite() {
    let mut session = create_session(1, 1);
    session.dispatch(LayerAction::Add { name: None }).unwrap();
    let lower = session.active_layer_id().unwrap();
    session
        .dispatch(InputEvent::ColorChange(RgbColor::from_u8(255, 0, 0)))
        .unwrap();
    dab(&mut session, 0, 0);

    session.dispatch(LayerAction::Add { name: None }).unwrap();
    session
        .dispatch(InputEvent::ColorChange(RgbColor::from_u8(0, 255, 0)))
        .unwrap();
    dab(&mut session, 0, 0);
    assert_eq2!(session.composite().get_pixel(0, 0).0, [0, 255, 0, 255]);

    session.dispatch(LayerAction::MoveUp(lower)).unwrap();
    assert_eq2!(session.composite().get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq2!(session.layers_top_first()[0].id(), lower);
}

#[test]
fn test_color_sample_then_erase() {
    let mut session = create_session(2, 1);
    session
        .dispatch(InputEvent::ColorChange(RgbColor::from_u8(10, 20, 30)))
        .unwrap();
    dab(&mut session, 1, 0);

    session.dispatch(InputEvent::ColorChange(RgbColor::BLACK)).unwrap();
    session
        .dispatch(InputEvent::ToolChange(Tool::ColorSample))
        .unwrap();
    assert_eq2!(
        session.dispatch(InputEvent::StrokeStart {
            pos: CanvasPos::pixel_center(1, 0),
            is_primary: true,
        }),
        Ok(EventPropagation::Consumed)
    );
    assert_eq2!(session.draw_state().color, RgbColor::from_u8(10, 20, 30));

    session.dispatch(InputEvent::ToolChange(Tool::Erase)).unwrap();
    session
        .dispatch(InputEvent::BrushShapeChange(BrushShape::Square))
        .unwrap();
    session.dispatch(InputEvent::BrushWidthChange(4)).unwrap();
    dab(&mut session, 0, 0);
    assert_eq2!(
        session
            .layer_stack()
            .get(LayerId(1))
            .unwrap()
            .surface()
            .count_non_transparent(),
        0
    );

    session.undo().unwrap();
    assert_eq2!(
        session.composite().get_pixel(1, 0).0,
        [10, 20, 30, 255]
    );
}

#[serial]
#[test]
fn test_project_round_trip_on_disk() {
    let temp_dir = try_create_temp_dir().unwrap();
    let path = temp_dir.join("drawing.json");

    let mut session = create_session(5, 4);
    session
        .dispatch(LayerAction::Add {
            name: Some("Sketch".to_string()),
        })
        .unwrap();
    stroke(&mut session, &[(0.5, 0.5), (4.5, 3.5)]);
    session
        .dispatch(LayerAction::Rename(LayerId(2), "Line".to_string()))
        .unwrap();
    session.save_project(&path).unwrap();

    let mut restored = create_session(2, 2);
    restored.load_project(&path).unwrap();
    assert_eq2!(restored.config().canvas_size, width(5) + height(4));
    assert_eq2!(restored.composite(), session.composite());
    assert_eq2!(
        restored
            .layers_top_first()
            .into_iter()
            .map(|it| it.name().to_string())
            .collect::<Vec<_>>(),
        vec!["Line".to_string(), "Background".to_string()]
    );
    assert_eq2!(
        restored.generate_code().to_text(),
        session.generate_code().to_text()
    );

    // New layers continue the id sequence of the saved project.
    restored.dispatch(LayerAction::Add { name: None }).unwrap();
    assert_eq2!(restored.active_layer_id(), Some(LayerId(3)));
}

#[test]
fn test_project_with_last_layer_id_cannot_grow() {
    let mut record = create_session(2, 2).to_project_record().unwrap();
    record.next_layer_id = LayerId(u32::MAX);

    let mut session = create_session(2, 2);
    session.load_project_record(&record).unwrap();
    let result = session.dispatch(LayerAction::Add {
        name: Some("New".to_string()),
    });
    assert_eq2!(
        result,
        Err(CanvasError::LayerIdsExhausted {
            last_layer_id: LayerId(u32::MAX)
        })
    );
    assert_eq2!(
        session
            .layers_top_first()
            .into_iter()
            .map(|it| it.name().to_string())
            .collect::<Vec<_>>(),
        vec!["Background".to_string()]
    );
    assert_eq2!(session.history().len(), 1);
}
