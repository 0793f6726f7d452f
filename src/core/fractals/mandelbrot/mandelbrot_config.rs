use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use crate::core::{
    actions::render_frame::render_frame::RenderStrategy,
    data::{
        complex::Complex,
        image_size::{ImageSize, ImageSizeError},
    },
    fractals::mandelbrot::{
        algorithm::{DEFAULT_ESCAPE_RADIUS, MandelbrotAlgorithm},
        colour_mapping::kinds::MandelbrotColourMapKinds,
        errors::MandelbrotError,
    },
    view::view_state::{ViewState, ViewStateError},
};

pub const DEFAULT_IMAGE_WIDTH: u32 = 1280;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 720;
pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);
/// Fits the whole set across the default window width.
pub const DEFAULT_ZOOM: f64 = DEFAULT_IMAGE_WIDTH as f64 * 0.25296875;
pub const DEFAULT_ZOOM_FACTOR: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    ImageSize(ImageSizeError),
    ViewState(ViewStateError),
    Mandelbrot(MandelbrotError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageSize(err) => write!(f, "invalid image size: {}", err),
            Self::ViewState(err) => write!(f, "invalid initial view: {}", err),
            Self::Mandelbrot(err) => write!(f, "invalid fractal settings: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ImageSize(err) => Some(err),
            Self::ViewState(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
        }
    }
}

impl From<ImageSizeError> for ConfigError {
    fn from(err: ImageSizeError) -> Self {
        Self::ImageSize(err)
    }
}

impl From<ViewStateError> for ConfigError {
    fn from(err: ViewStateError) -> Self {
        Self::ViewState(err)
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

/// Startup settings. Everything here is fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub width: u32,
    pub height: u32,
    pub initial_center: Complex,
    pub initial_zoom: f64,
    pub zoom_factor: f64,
    pub escape_radius: f64,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub render_strategy: RenderStrategy,
    /// `None` uses the host's available parallelism.
    pub worker_count: Option<NonZeroU32>,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            initial_center: DEFAULT_CENTER,
            initial_zoom: DEFAULT_ZOOM,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            render_strategy: RenderStrategy::default(),
            worker_count: None,
        }
    }
}

impl MandelbrotConfig {
    pub fn image_size(&self) -> Result<ImageSize, ConfigError> {
        Ok(ImageSize::new(self.width, self.height)?)
    }

    pub fn initial_view(&self) -> Result<ViewState, ConfigError> {
        Ok(ViewState::new(self.initial_center, self.initial_zoom, self.zoom_factor)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.image_size()?;
        self.initial_view()?;
        MandelbrotAlgorithm::new(1, self.escape_radius)?;

        Ok(())
    }
}
