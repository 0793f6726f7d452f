//! One full render pass: partition the rows, colour every pixel in parallel,
//! wait for all workers, then present.

pub mod errors;
pub mod fill_band;
pub mod ports;
pub mod render_frame;
pub mod report;

pub use errors::{FillFrameError, RenderFrameError};
pub use render_frame::{ParallelRenderer, RenderStrategy, fill_frame};
pub use report::RenderReport;
