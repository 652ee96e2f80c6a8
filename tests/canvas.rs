use sketchpad::draw::CairoSurface;
use sketchpad::input::{
    Disposition, DrawingSurface, PointerEvent, PointerKind, SizeUnit, SurfaceOrigin, TouchEvent,
    TouchPhase, TouchPoint, ToolState,
};

fn make_canvas(width: u32, height: u32) -> DrawingSurface<CairoSurface> {
    DrawingSurface::initialize(width, height, ToolState::default()).unwrap()
}

fn touch_at(phase: TouchPhase, x: f64, y: f64) -> TouchEvent {
    TouchEvent::new(
        phase,
        vec![TouchPoint {
            client_x: x,
            client_y: y,
        }],
    )
}

#[test]
fn blank_canvas_exports_blank_image() {
    let canvas = make_canvas(320, 240);
    assert!(!canvas.surface().has_content().unwrap());
    let image = canvas.export().unwrap();
    assert_eq!(image.file_name(), "drawing.png");
    assert!(image.to_data_url().starts_with("data:image/png;base64,"));
}

#[test]
fn mouse_stroke_paints_and_clear_erases() {
    let mut canvas = make_canvas(320, 240);
    canvas.on_pointer_event(PointerEvent::new(PointerKind::Down, 20.0, 120.0));
    canvas.on_pointer_event(PointerEvent::new(PointerKind::Move, 300.0, 120.0));
    canvas.on_pointer_event(PointerEvent::new(PointerKind::Up, 300.0, 120.0));
    assert!(canvas.surface().has_content().unwrap());

    canvas.clear();
    assert!(!canvas.surface().has_content().unwrap());
    assert_eq!(canvas.tools().stroke_width(), 30);
}

#[test]
fn offset_canvas_maps_touches_into_surface_space() {
    let mut canvas = make_canvas(200, 200);
    canvas.set_width(SizeUnit::new(2).unwrap());
    let origin = SurfaceOrigin::new(300.0, 400.0);

    let start = canvas.on_touch_event(&touch_at(TouchPhase::Start, 320.0, 500.0), origin);
    assert_eq!(start, Disposition::PreventDefault);
    canvas.on_touch_event(&touch_at(TouchPhase::Move, 480.0, 500.0), origin);
    canvas.on_touch_event(&TouchEvent::new(TouchPhase::End, vec![]), origin);

    let surface = canvas.surface();
    assert_eq!(surface.pixel(100, 100).unwrap(), Some([0x00, 0xD8, 0xFF, 0xFF]));
    assert_eq!(surface.pixel(100, 130).unwrap(), Some([0, 0, 0, 0]));
}
