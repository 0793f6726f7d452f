//! Input adapters that turn platform events into controller events.

#[cfg(feature = "gui")]
pub mod gui;
