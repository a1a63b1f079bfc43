pub mod bounds;
pub mod colour;
pub mod complex;
pub mod iterate_state;
pub mod pixel_buffer;
pub mod resolution;
pub mod sample_grid;
