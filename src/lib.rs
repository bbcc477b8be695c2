//! A pirate adventure in the terminal.
//!
//! The pieces, roughly from the bottom up:
//!
//! - [`world`] and [`player`] are the game's data: the islands, and the pirate sailing between them.
//! - [`config`] sets up the starting pirate without recompiling.
//! - [`io`] is everything between the game and the terminal, and [`view`], [`content`] and [`cutscenes`] build the
//!   actual screens on top of it.
//! - [`game`] runs the loop that ties it all together, one menu choice at a time.

pub mod action;
pub mod config;
pub mod constants;
pub mod content;
pub mod cutscenes;
mod error;
pub mod game;
pub mod io;
pub mod player;
mod util;
pub mod view;
pub mod world;

pub use error::{Error, Result};
