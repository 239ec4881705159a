pub mod board;
pub mod renderer;

pub use board::Board;
pub use renderer::{Renderer, View};
