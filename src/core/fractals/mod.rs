pub mod formula;
pub mod fractal_kinds;
