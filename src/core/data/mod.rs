pub mod colour;
pub mod complex;
pub mod image_size;
pub mod pixel_buffer;
pub mod point;
pub mod work_chunk;
