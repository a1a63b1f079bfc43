pub mod engine_config;
pub mod fractal_state;
