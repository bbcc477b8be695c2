//! Everything between the game and the terminal: formatted text, the in-memory [`Screen`], widgets, raw input, and
//! the [`IoSystem`](sys::IoSystem) backends that put it all on a real display.

pub mod fmt;
pub mod input;
pub mod screen;
pub mod sys;
pub mod text_input;
pub mod widgets;
mod xy;

pub use input::{Action, Key};
pub use screen::Screen;
pub use xy::XY;
