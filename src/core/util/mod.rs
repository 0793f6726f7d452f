pub mod calculate_work_chunks;
pub mod calculate_worker_count;
pub mod pixel_to_complex_coords;
