pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::controllers::cli::{render_to_file, RenderToFileController, RenderToFileError};
pub use crate::controllers::interactive::{
    EventSource, InputEvent, InteractiveController, Key, LoopControl, MouseButton,
};
pub use crate::core::actions::render_frame::{
    ParallelRenderer, RenderFrameError, RenderReport, RenderStrategy,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
pub use crate::core::view::ViewState;
#[cfg(feature = "gui")]
pub use crate::input::gui::{RunGuiCommand, RunGuiError};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::memory::MemorySurface;
