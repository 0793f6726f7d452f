//! Maps raw winit input onto the controller's event model.

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::interactive::events::{InputEvent, Key, MouseButton};
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

#[must_use]
pub fn translate_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        _ => Key::Other,
    }
}

#[must_use]
pub fn translate_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}

/// Converts a window position to image pixel coordinates.
///
/// The image is stretched over the whole window, so the two may differ in scale.
#[must_use]
pub fn cursor_to_pixel(
    position: PhysicalPosition<f64>,
    window_size: PhysicalSize<u32>,
    image_size: ImageSize,
) -> Point {
    let scale = |coord: f64, window: u32, image: u32| {
        if window == 0 {
            return coord.floor() as i32;
        }

        (coord * f64::from(image) / f64::from(window)).floor() as i32
    };

    Point {
        x: scale(position.x, window_size.width, image_size.width()),
        y: scale(position.y, window_size.height, image_size.height()),
    }
}

/// Translates one window event. Cursor tracking is left to the caller.
///
/// Key repeats are dropped so holding a key acts once.
#[must_use]
pub fn translate_window_event(event: &WindowEvent, cursor: Option<Point>) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(InputEvent::Quit),
        WindowEvent::KeyboardInput { event, .. }
            if event.state == ElementState::Pressed && !event.repeat =>
        {
            Some(InputEvent::KeyDown(translate_key(event.physical_key)))
        }
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            button,
            ..
        } => cursor.map(|Point { x, y }| InputEvent::MouseDown {
            x,
            y,
            button: translate_mouse_button(*button),
        }),
        WindowEvent::RedrawRequested => Some(InputEvent::Redraw),
        _ => None,
    }
}
