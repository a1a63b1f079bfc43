pub mod backend_kinds;
pub mod iterate_parallel_rayon;
pub mod iterate_serial;
pub mod ports;
pub mod step_pixel;
