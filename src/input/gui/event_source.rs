use std::collections::VecDeque;
use std::time::Duration;

use log::debug;
use winit::dpi::PhysicalPosition;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::Window;

use crate::controllers::interactive::events::InputEvent;
use crate::controllers::interactive::ports::event_source::EventSource;
use crate::core::data::image_size::ImageSize;
use crate::input::gui::translate::{cursor_to_pixel, translate_window_event};

/// Upper bound on how long an idle wait blocks before polling again.
const IDLE_WAIT: Duration = Duration::from_millis(16);

/// Pumps the winit event loop on demand instead of handing it control.
pub struct WinitEventSource {
    event_loop: EventLoop<()>,
    window: &'static Window,
    image_size: ImageSize,
    cursor: Option<PhysicalPosition<f64>>,
    pending: VecDeque<InputEvent>,
}

impl WinitEventSource {
    pub fn new(event_loop: EventLoop<()>, window: &'static Window, image_size: ImageSize) -> Self {
        Self {
            event_loop,
            window,
            image_size,
            cursor: None,
            pending: VecDeque::new(),
        }
    }

    fn pump(&mut self, timeout: Duration) {
        let window_id = self.window.id();
        let window_size = self.window.inner_size();
        let image_size = self.image_size;
        let cursor = &mut self.cursor;
        let pending = &mut self.pending;

        let status = self.event_loop.pump_events(Some(timeout), |event, _| {
            let Event::WindowEvent { window_id: id, event } = event else {
                return;
            };

            if id != window_id {
                return;
            }

            match event {
                WindowEvent::CursorMoved { position, .. } => *cursor = Some(position),
                WindowEvent::CursorLeft { .. } => *cursor = None,
                event => {
                    let pixel = cursor
                        .map(|position| cursor_to_pixel(position, window_size, image_size));

                    if let Some(input) = translate_window_event(&event, pixel) {
                        pending.push_back(input);
                    }
                }
            }
        });

        if let PumpStatus::Exit(code) = status {
            debug!("event loop exited with code {}", code);
            self.pending.push_back(InputEvent::Quit);
        }
    }
}

impl EventSource for WinitEventSource {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if self.pending.is_empty() {
            self.pump(Duration::ZERO);
        }

        self.pending.pop_front()
    }

    fn wait_for_events(&mut self) {
        self.pump(IDLE_WAIT);
    }
}
