use log::{debug, info};

use crate::controllers::interactive::events::{InputEvent, Key, MouseButton};
use crate::controllers::interactive::ports::event_source::EventSource;
use crate::core::actions::render_frame::errors::RenderFrameError;
use crate::core::actions::render_frame::ports::display_surface::DisplaySurface;
use crate::core::actions::render_frame::render_frame::ParallelRenderer;
use crate::core::actions::render_frame::report::RenderReport;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::view::view_state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Owns the view and re-renders it synchronously after every change.
///
/// Renders block the caller, so a new pass can never start before the
/// previous one has been presented.
#[derive(Debug)]
pub struct InteractiveController {
    view: ViewState,
    renderer: ParallelRenderer,
}

impl InteractiveController {
    pub fn new(config: &MandelbrotConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            view: config.initial_view()?,
            renderer: ParallelRenderer::new(config),
        })
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn render<S: DisplaySurface>(
        &self,
        surface: &mut S,
    ) -> Result<RenderReport, RenderFrameError<S::Error>> {
        self.renderer.render(&self.view, surface)
    }

    /// Applies one event. Returns [`LoopControl::Stop`] when the session should end.
    pub fn handle_event<S: DisplaySurface>(
        &mut self,
        event: InputEvent,
        surface: &mut S,
    ) -> Result<LoopControl, RenderFrameError<S::Error>> {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                info!("quit requested");
                return Ok(LoopControl::Stop);
            }
            InputEvent::KeyDown(Key::Space) => {
                self.view.reset();
                self.render(surface)?;
            }
            InputEvent::MouseDown { x, y, button } => {
                let zoom: fn(&mut ViewState) = match button {
                    MouseButton::Left => ViewState::zoom_in,
                    MouseButton::Right => ViewState::zoom_out,
                    MouseButton::Other => {
                        debug!("ignoring {:?}", event);
                        return Ok(LoopControl::Continue);
                    }
                };

                let pixel = Point { x, y };
                let image_size = surface.size();

                if !image_size.contains_point(pixel) {
                    debug!("ignoring click outside the image at ({}, {})", x, y);
                    return Ok(LoopControl::Continue);
                }

                let target = pixel_to_complex_coords(pixel, image_size, &self.view);
                self.view.recenter(target);
                zoom(&mut self.view);
                self.render(surface)?;
            }
            InputEvent::Redraw => {
                surface.present().map_err(RenderFrameError::Present)?;
            }
            InputEvent::KeyDown(Key::Other) => {
                debug!("ignoring {:?}", event);
            }
        }

        Ok(LoopControl::Continue)
    }

    /// Renders the initial view, then handles events until one asks to stop.
    pub fn run<E, S>(
        &mut self,
        events: &mut E,
        surface: &mut S,
    ) -> Result<(), RenderFrameError<S::Error>>
    where
        E: EventSource,
        S: DisplaySurface,
    {
        self.render(surface)?;

        loop {
            let Some(event) = events.poll_event() else {
                events.wait_for_events();
                continue;
            };

            if self.handle_event(event, surface)? == LoopControl::Stop {
                return Ok(());
            }
        }
    }
}
