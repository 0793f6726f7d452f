use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary (P6) PPM, creating missing parent directories.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(File::create(filepath)?);
    let size = buffer.size();

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", size.width(), size.height())?;
    writeln!(file, "255")?;
    file.write_all(&rgba_to_rgb(buffer.data()))?;
    file.flush()?;

    Ok(())
}
