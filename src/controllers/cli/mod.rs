pub mod still_render;
