//! Windowed front end: a winit window with a `pixels` framebuffer.

pub mod commands;
pub mod event_source;
pub mod translate;

pub use commands::run_gui::{RunGuiCommand, RunGuiError};
pub use event_source::WinitEventSource;
