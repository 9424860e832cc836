pub mod emit;
pub mod event;
pub mod render;
