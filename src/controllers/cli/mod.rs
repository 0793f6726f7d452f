pub mod render_to_file;

pub use render_to_file::{render_to_file, RenderToFileController, RenderToFileError};
