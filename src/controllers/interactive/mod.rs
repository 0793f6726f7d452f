//! Interactive exploration: turns input events into view changes and re-renders.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: an [`EventSource`] yielding [`InputEvent`]s
//! - **Output**: a `DisplaySurface` the frame is rendered into and presented on
//! - **Core**: `ViewState` transforms and the `ParallelRenderer` from `core/`

mod controller;
pub mod events;
pub mod ports;

pub use controller::{InteractiveController, LoopControl};
pub use events::{InputEvent, Key, MouseButton};
pub use ports::EventSource;
