use sketchpad::draw::{Color, RED, WHITE};
use sketchpad::export::{ExportError, ExportSink, Exporter};
use sketchpad::tools::Tool;
use sketchpad::{Controller, ControllerOptions, InputEvent};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Clone, Default)]
struct CollectingSink {
    images: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl ExportSink for CollectingSink {
    fn save(&mut self, png: &[u8]) -> Result<Option<PathBuf>, ExportError> {
        self.images.borrow_mut().push(png.to_vec());
        Ok(None)
    }
}

fn marker_only_options() -> ControllerOptions {
    ControllerOptions {
        canvas_width: 48,
        canvas_height: 48,
        tools: vec![Tool::marker("thin", 2.0), Tool::marker("thick", 6.0)],
        export_width: 48,
        export_height: 48,
        ..ControllerOptions::default()
    }
}

fn make_controller() -> (Controller, CollectingSink) {
    let sink = CollectingSink::default();
    let controller = Controller::new(marker_only_options(), Box::new(sink.clone())).unwrap();
    (controller, sink)
}

fn drag(controller: &mut Controller, from: (f64, f64), to: (f64, f64)) {
    for event in [
        InputEvent::PointerDown { x: from.0, y: from.1 },
        InputEvent::PointerMove { x: to.0, y: to.1 },
        InputEvent::PointerUp,
    ] {
        controller.handle(event).unwrap();
    }
}

fn live_pixels(controller: &Controller) -> Vec<u8> {
    controller.surface().snapshot().unwrap()
}

#[test]
fn live_canvas_matches_a_fresh_replay_once_the_pointer_leaves() {
    let (mut controller, _) = make_controller();
    drag(&mut controller, (5.0, 5.0), (40.0, 5.0));
    controller.handle(InputEvent::SelectTool("thick".into())).unwrap();
    controller
        .handle(InputEvent::ColorChange { r: 255, g: 0, b: 0 })
        .unwrap();
    drag(&mut controller, (5.0, 30.0), (40.0, 30.0));
    controller.handle(InputEvent::PointerLeave).unwrap();

    let replay = Exporter::new(48, 48)
        .render(
            48,
            48,
            controller.background(),
            controller.session().history().committed(),
        )
        .unwrap();

    assert_eq!(live_pixels(&controller), replay.snapshot().unwrap());
}

#[test]
fn export_never_contains_the_tool_preview() {
    let (mut controller, sink) = make_controller();
    controller.handle(InputEvent::SelectTool("thick".into())).unwrap();
    controller
        .handle(InputEvent::PointerMove { x: 24.0, y: 24.0 })
        .unwrap();

    // The preview square is visible on the live canvas only.
    let live = controller.surface().pixel(24, 24).unwrap().unwrap();
    assert_ne!(live, [255, 255, 255, 255]);

    controller.handle(InputEvent::Export).unwrap();
    assert_eq!(sink.images.borrow().len(), 1);

    let blank = Exporter::new(48, 48)
        .render_png(48, 48, WHITE, &[])
        .unwrap();
    assert_eq!(sink.images.borrow()[0], blank);
}

#[test]
fn undo_then_redo_restores_identical_pixels() {
    let (mut controller, _) = make_controller();
    drag(&mut controller, (4.0, 4.0), (44.0, 44.0));
    drag(&mut controller, (44.0, 4.0), (4.0, 44.0));
    controller.handle(InputEvent::PointerLeave).unwrap();
    let before = live_pixels(&controller);

    controller.handle(InputEvent::Undo).unwrap();
    let after_undo = live_pixels(&controller);
    assert_ne!(before, after_undo);

    controller.handle(InputEvent::Redo).unwrap();
    assert_eq!(before, live_pixels(&controller));
}

#[test]
fn later_strokes_paint_over_earlier_ones() {
    let (mut controller, _) = make_controller();
    controller.handle(InputEvent::SelectTool("thick".into())).unwrap();
    drag(&mut controller, (4.0, 24.0), (44.0, 24.0));
    controller
        .handle(InputEvent::ColorChange { r: 255, g: 0, b: 0 })
        .unwrap();
    drag(&mut controller, (24.0, 4.0), (24.0, 44.0));
    controller.handle(InputEvent::PointerLeave).unwrap();

    let [r, g, b] = RED.to_rgb8();
    assert_eq!(
        controller.surface().pixel(24, 24).unwrap(),
        Some([r, g, b, 255])
    );
}

#[test]
fn export_is_scaled_to_the_export_resolution() {
    let exporter = Exporter::new(96, 96);
    let stroke = Tool::marker("thick", 6.0).begin_stroke(24.0, 24.0, Color::from_rgb8(0, 0, 255));
    let surface = exporter.render(48, 48, WHITE, &[stroke]).unwrap();

    assert_eq!(surface.width(), 96);
    // Canvas point (24, 24) lands at export pixel (48, 48).
    assert_eq!(surface.pixel(48, 48).unwrap(), Some([0, 0, 255, 255]));
    assert_eq!(surface.pixel(5, 5).unwrap(), Some([255, 255, 255, 255]));
}
