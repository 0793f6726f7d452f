use std::error::Error;
use std::fmt;

use log::info;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::InteractiveController;
use crate::core::actions::render_frame::errors::RenderFrameError;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
use crate::input::gui::event_source::WinitEventSource;
use crate::presenters::pixels::surface::{PixelsSurface, WINDOW_TITLE};

#[derive(Debug)]
pub enum RunGuiError {
    Config(ConfigError),
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Render(RenderFrameError<pixels::Error>),
}

impl fmt::Display for RunGuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::EventLoop(err) => write!(f, "failed to create event loop: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "failed to create pixel surface: {}", err),
            Self::Render(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RunGuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<ConfigError> for RunGuiError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<EventLoopError> for RunGuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for RunGuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<RenderFrameError<pixels::Error>> for RunGuiError {
    fn from(err: RenderFrameError<pixels::Error>) -> Self {
        Self::Render(err)
    }
}

pub struct RunGuiCommand {
    config: MandelbrotConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs until the user quits.
    pub fn execute(&self) -> Result<(), RunGuiError> {
        let mut controller = InteractiveController::new(&self.config)?;
        let image_size = self.config.image_size()?;
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window; it lives for the rest of the process anyway
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(image_size.width(), image_size.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let mut surface = PixelsSurface::new(window, image_size).map_err(RunGuiError::Surface)?;
        let mut events = WinitEventSource::new(event_loop, window, image_size);

        info!(
            "opened {}x{} window, {:?} rendering",
            image_size.width(),
            image_size.height(),
            self.config.render_strategy
        );

        controller.run(&mut events, &mut surface)?;

        info!("window closed");
        Ok(())
    }
}
