use crate::core::data::work_chunk::WorkChunk;
use std::num::NonZeroU32;

/// Splits `image_height` rows into `worker_count` ordered, disjoint chunks.
///
/// Every chunk gets `image_height / worker_count` rows and the last chunk also
/// takes the remainder. With more workers than rows all chunks but the last
/// are empty.
#[must_use]
pub fn calculate_work_chunks(image_height: u32, worker_count: NonZeroU32) -> Vec<WorkChunk> {
    let total_chunks = worker_count.get();
    let chunk_height = image_height / total_chunks;

    (0..total_chunks)
        .map(|chunk_num| {
            let start_row = chunk_num * chunk_height;
            let end_row = if chunk_num == total_chunks - 1 {
                image_height
            } else {
                (chunk_num + 1) * chunk_height
            };

            WorkChunk { start_row, end_row }
        })
        .collect()
}
