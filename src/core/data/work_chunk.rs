use std::ops::Range;

/// A half-open range of image rows `[start_row, end_row)` owned by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkChunk {
    pub start_row: u32,
    pub end_row: u32,
}

impl WorkChunk {
    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
