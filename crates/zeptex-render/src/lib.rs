#![forbid(unsafe_code)]

//! Pure screen projection: editor state in, screen image out.

pub mod layout;
pub mod renderer;
pub mod screen;

pub use renderer::render;
pub use screen::{Row, ScreenImage};
