use std::collections::VecDeque;
use std::num::NonZeroU32;

use mandelbrot_explorer::core::data::complex::Complex;
use mandelbrot_explorer::core::data::image_size::ImageSize;
use mandelbrot_explorer::core::data::point::Point;
use mandelbrot_explorer::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use mandelbrot_explorer::{
    EventSource, InputEvent, InteractiveController, Key, MandelbrotConfig, MemorySurface,
    MouseButton, RenderStrategy,
};

/// Replays a fixed list of events, then quits.
struct ScriptedEvents {
    events: VecDeque<Option<InputEvent>>,
    waits: u32,
}

impl ScriptedEvents {
    /// `None` entries simulate an idle poll.
    fn new(events: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            events: events.into_iter().collect(),
            waits: 0,
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front().unwrap_or(Some(InputEvent::Quit))
    }

    fn wait_for_events(&mut self) {
        self.waits += 1;
    }
}

fn config(strategy: RenderStrategy) -> MandelbrotConfig {
    MandelbrotConfig {
        width: 80,
        height: 45,
        initial_zoom: 80.0 * 0.25296875,
        render_strategy: strategy,
        worker_count: NonZeroU32::new(4),
        ..MandelbrotConfig::default()
    }
}

fn surface(config: &MandelbrotConfig) -> MemorySurface {
    MemorySurface::new(config.image_size().unwrap())
}

fn mouse(x: i32, y: i32, button: MouseButton) -> InputEvent {
    InputEvent::MouseDown { x, y, button }
}

fn click(x: i32, y: i32, button: MouseButton) -> Option<InputEvent> {
    Some(mouse(x, y, button))
}

#[test]
fn session_renders_initial_view_and_stops_on_quit() {
    let config = config(RenderStrategy::ScopedThreads);
    let mut controller = InteractiveController::new(&config).unwrap();
    let mut surface = surface(&config);
    let mut events = ScriptedEvents::new([
        None,
        None,
        Some(InputEvent::Quit),
        click(1, 1, MouseButton::Left),
    ]);

    controller.run(&mut events, &mut surface).unwrap();

    assert_eq!(surface.presented_frames(), 1);
    assert_eq!(events.waits, 2);
    // the click after Quit is never consumed
    assert_eq!(events.events.len(), 1);
}

#[test]
fn escape_key_ends_the_session() {
    let config = config(RenderStrategy::Rayon);
    let mut controller = InteractiveController::new(&config).unwrap();
    let mut surface = surface(&config);
    let mut events = ScriptedEvents::new([
        Some(InputEvent::KeyDown(Key::Escape)),
        click(1, 1, MouseButton::Left),
    ]);

    controller.run(&mut events, &mut surface).unwrap();

    assert_eq!(surface.presented_frames(), 1);
    assert_eq!(events.events.len(), 1);
}

#[test]
fn each_zoom_renders_one_frame() {
    let config = config(RenderStrategy::ScopedThreads);
    let mut controller = InteractiveController::new(&config).unwrap();
    let mut surface = surface(&config);
    let mut events = ScriptedEvents::new([
        click(20, 10, MouseButton::Left),
        click(60, 40, MouseButton::Right),
        click(40, 22, MouseButton::Left),
    ]);

    controller.run(&mut events, &mut surface).unwrap();

    assert_eq!(surface.presented_frames(), 4);
}

#[test]
fn left_click_then_space_restores_the_initial_frame() {
    let config = config(RenderStrategy::ScopedThreads);
    let mut controller = InteractiveController::new(&config).unwrap();
    let mut surface = surface(&config);

    controller.render(&mut surface).unwrap();
    let initial_frame = surface.buffer().data().to_vec();
    let initial_view = *controller.view();

    controller
        .handle_event(mouse(12, 30, MouseButton::Left), &mut surface)
        .unwrap();
    assert_ne!(surface.buffer().data(), initial_frame.as_slice());

    controller
        .handle_event(InputEvent::KeyDown(Key::Space), &mut surface)
        .unwrap();

    assert_eq!(*controller.view(), initial_view);
    assert_eq!(surface.buffer().data(), initial_frame.as_slice());
}

#[test]
fn clicked_point_becomes_the_new_center() {
    let config = config(RenderStrategy::ScopedThreads);
    let mut controller = InteractiveController::new(&config).unwrap();
    let mut surface = surface(&config);
    let size = ImageSize::new(80, 45).unwrap();
    let target = pixel_to_complex_coords(Point { x: 70, y: 3 }, size, controller.view());

    controller
        .handle_event(mouse(70, 3, MouseButton::Left), &mut surface)
        .unwrap();

    assert_eq!(controller.view().center(), target);
    // after recentering, the image center pixel samples the clicked point
    assert_eq!(pixel_to_complex_coords(size.center_pixel(), size, controller.view()), target);
}

#[test]
fn right_click_divides_zoom_by_the_factor() {
    let config = config(RenderStrategy::Rayon);
    let mut controller = InteractiveController::new(&config).unwrap();
    let mut surface = surface(&config);
    let zoom = controller.view().zoom();

    controller
        .handle_event(mouse(40, 22, MouseButton::Right), &mut surface)
        .unwrap();

    assert_eq!(controller.view().zoom(), zoom / 4.0);
    assert_eq!(controller.view().center(), Complex::new(-0.5, 0.0));
}

#[test]
fn strategies_render_identical_sessions() {
    let script = || {
        ScriptedEvents::new([
            click(10, 10, MouseButton::Left),
            Some(InputEvent::KeyDown(Key::Other)),
            click(50, 30, MouseButton::Left),
        ])
    };

    let frames = [RenderStrategy::ScopedThreads, RenderStrategy::Rayon].map(|strategy| {
        let config = config(strategy);
        let mut controller = InteractiveController::new(&config).unwrap();
        let mut surface = surface(&config);

        controller.run(&mut script(), &mut surface).unwrap();
        surface.into_buffer()
    });

    assert_eq!(frames[0].data(), frames[1].data());
}

#[test]
fn render_report_describes_the_presented_view() {
    let config = config(RenderStrategy::ScopedThreads);
    let mut controller = InteractiveController::new(&config).unwrap();
    let mut surface = surface(&config);

    controller
        .handle_event(mouse(5, 5, MouseButton::Left), &mut surface)
        .unwrap();

    let report = surface.last_report().unwrap();
    assert_eq!(report.center, controller.view().center());
    assert_eq!(report.zoom, controller.view().zoom());
    assert_eq!(report.max_iterations, controller.view().max_iterations(80));
    assert_eq!(report.worker_count, 4);
}
