pub mod colorize;
pub mod iterate;
