use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::work_chunk::WorkChunk;
use std::error::Error;
use std::fmt;
use std::ops::Range;

/// Pixels are packed RGBA8, the layout the window framebuffer uses.
pub const BYTES_PER_PIXEL: usize = 4;

fn image_size_to_buffer_size(size: ImageSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

/// Byte offset of pixel `(row, col)` in a row-major buffer `stride` pixels wide.
///
/// Returns `None` when `col` lies outside the row or the offset overflows.
#[must_use]
pub fn pixel_offset(row: usize, col: usize, stride: usize) -> Option<usize> {
    if col >= stride {
        return None;
    }

    row.checked_mul(stride)?
        .checked_add(col)?
        .checked_mul(BYTES_PER_PIXEL)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
    PixelOutsideBounds {
        row: u32,
        col: u32,
        rows: Range<u32>,
        width: u32,
    },
    ChunkOutOfOrder {
        chunk: WorkChunk,
        expected_start_row: u32,
    },
    ChunksDoNotCover {
        covered_rows: u32,
        height: u32,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "image needs {} bytes but buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                row,
                col,
                rows,
                width,
            } => {
                write!(
                    f,
                    "pixel at row:{}, col:{} outside of rows {}..{} and width {}",
                    row, col, rows.start, rows.end, width
                )
            }
            Self::ChunkOutOfOrder {
                chunk,
                expected_start_row,
            } => {
                write!(
                    f,
                    "work chunk {}..{} does not start at row {}",
                    chunk.start_row, chunk.end_row, expected_start_row
                )
            }
            Self::ChunksDoNotCover {
                covered_rows,
                height,
            } => {
                write!(
                    f,
                    "work chunks cover {} of {} rows",
                    covered_rows, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

fn write_colour(data: &mut [u8], offset: usize, colour: Colour) {
    data[offset] = colour.r;
    data[offset + 1] = colour.g;
    data[offset + 2] = colour.b;
    data[offset + 3] = u8::MAX;
}

/// Owned pixel storage, used when there is no window to render into.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    size: ImageSize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates an opaque black buffer.
    #[must_use]
    pub fn new(size: ImageSize) -> Self {
        let mut data = vec![0; image_size_to_buffer_size(size)];

        for pixel in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = u8::MAX;
        }

        Self { size, data }
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn view_mut(&mut self) -> PixelBufferView<'_> {
        PixelBufferView {
            size: self.size,
            data: &mut self.data,
        }
    }

    pub fn pixel(&self, row: u32, col: u32) -> Result<Colour, PixelBufferError> {
        let offset = pixel_offset(row as usize, col as usize, self.size.width() as usize)
            .filter(|offset| offset + BYTES_PER_PIXEL <= self.data.len())
            .ok_or(PixelBufferError::PixelOutsideBounds {
                row,
                col,
                rows: 0..self.size.height(),
                width: self.size.width(),
            })?;

        Ok(Colour {
            r: self.data[offset],
            g: self.data[offset + 1],
            b: self.data[offset + 2],
        })
    }
}

/// Mutable access to a surface's pixels. The view can be written to but never resized.
#[derive(Debug)]
pub struct PixelBufferView<'a> {
    size: ImageSize,
    data: &'a mut [u8],
}

impl<'a> PixelBufferView<'a> {
    pub fn new(size: ImageSize, data: &'a mut [u8]) -> Result<Self, PixelBufferError> {
        let expected_size = image_size_to_buffer_size(size);

        if expected_size != data.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: data.len(),
            });
        }

        Ok(Self { size, data })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Splits the buffer into one disjoint band per work chunk.
    ///
    /// Chunks must be ordered, contiguous and cover every row exactly once,
    /// which is what lets each band be written from its own thread.
    pub fn split_into_bands(
        &mut self,
        chunks: &[WorkChunk],
    ) -> Result<Vec<RowBand<'_>>, PixelBufferError> {
        let width = self.size.width();
        let height = self.size.height();
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let mut rest: &mut [u8] = &mut self.data[..];
        let mut next_row = 0;
        let mut bands = Vec::with_capacity(chunks.len());

        for &chunk in chunks {
            if chunk.start_row != next_row
                || chunk.end_row < chunk.start_row
                || chunk.end_row > height
            {
                return Err(PixelBufferError::ChunkOutOfOrder {
                    chunk,
                    expected_start_row: next_row,
                });
            }

            let band_bytes = chunk.len() as usize * row_bytes;
            let (band, tail) = std::mem::take(&mut rest).split_at_mut(band_bytes);
            bands.push(RowBand {
                rows: chunk.rows(),
                width,
                data: band,
            });
            rest = tail;
            next_row = chunk.end_row;
        }

        if next_row != height {
            return Err(PixelBufferError::ChunksDoNotCover {
                covered_rows: next_row,
                height,
            });
        }

        Ok(bands)
    }
}

/// A horizontal strip of the pixel buffer, addressed by absolute row numbers.
#[derive(Debug)]
pub struct RowBand<'a> {
    rows: Range<u32>,
    width: u32,
    data: &'a mut [u8],
}

impl RowBand<'_> {
    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.rows.clone()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_pixel(
        &mut self,
        row: u32,
        col: u32,
        colour: Colour,
    ) -> Result<(), PixelBufferError> {
        let offset = row
            .checked_sub(self.rows.start)
            .filter(|_| row < self.rows.end)
            .and_then(|local_row| {
                pixel_offset(local_row as usize, col as usize, self.width as usize)
            })
            .filter(|offset| offset + BYTES_PER_PIXEL <= self.data.len())
            .ok_or(PixelBufferError::PixelOutsideBounds {
                row,
                col,
                rows: self.rows.clone(),
                width: self.width,
            })?;

        write_colour(self.data, offset, colour);
        Ok(())
    }
}
