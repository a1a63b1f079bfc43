pub mod colorize;
pub mod ports;
