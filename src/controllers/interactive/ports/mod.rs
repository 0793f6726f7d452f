//! Port definitions for the interactive controller.
//!
//! The controller reads input through [`EventSource`] and draws through the
//! core [`DisplaySurface`](crate::core::actions::render_frame::ports::DisplaySurface) port.

pub mod event_source;

pub use event_source::EventSource;
