pub mod frame_data;
pub mod ui_options;
pub mod view_command;
