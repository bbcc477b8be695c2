//! The backends that actually talk to a display. Each one is controlled by a feature named similarly and exports a
//! struct implementing [`IoSystem`]; the game itself only ever sees the trait.

#[cfg(feature = "__sys")]
use std::collections::BTreeMap;

use crate::error::Result;

use super::{input::Action, screen::Screen, XY};

#[cfg(feature = "sys_cli")]
pub mod ansi_cli;


/// An input/output system.
///
/// Everything here blocks: the game is a single thread that draws a frame, then waits for the player.
pub trait IoSystem {
    /// Actually render a [`Screen`] to the display.
    ///
    /// This must cope with a `Screen` of the wrong size, e.g. if the terminal was resized since it was built.
    fn draw(&mut self, screen: &Screen) -> Result<()>;
    /// Get the size of the display, in characters.
    fn size(&self) -> XY;

    /// Wait for the next user input.
    fn input(&mut self) -> Result<Action>;

    /// Give the display back the way it was found. This will always be the last method called on this object.
    fn stop(&mut self);
}

/// Based on the IO system features enabled, attempt to initialize an IO system; in order:
///
/// - crossterm CLI (`sys_cli`)
///
/// The Err type maps the name of each system tried to the error it hit. It's empty if no system was compiled in.
#[cfg(feature = "__sys")]
pub fn load() -> core::result::Result<Box<dyn IoSystem>, BTreeMap<&'static str, crate::Error>> {
    #[allow(unused_mut)]
    let mut errors = BTreeMap::new();
    #[allow(unused_macros)]
    macro_rules! try_init {
        ( $name:ident: $( $init:tt )* ) => {
            match { $($init)* } {
                Ok(iosys) => return Ok(Box::new(iosys)),
                Err(e) => {
                    tracing::debug!(system = stringify!($name), error = %e, "io system failed to load");
                    errors.insert(stringify!($name), e);
                }
            };
        }
    }
    #[cfg(feature = "sys_cli")]
    {
        try_init! { ansi_cli: ansi_cli::AnsiIo::get() }
    }
    Err(errors)
}
