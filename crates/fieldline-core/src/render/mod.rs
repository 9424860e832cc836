pub mod line_render;

pub use line_render::render_line;
