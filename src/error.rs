use std::{borrow::Cow, path::PathBuf};

/// Everything that can go wrong outside of the game's own rules.
///
/// Mistakes the player makes (travelling without a ship, typing a bad age) aren't errors; they're shown inline and the
/// game carries on.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading from or drawing to the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The config file couldn't be read or didn't parse.
    #[error("bad config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The player closed the game while it was waiting on a prompt.
    #[error("closed by the player")]
    Closed,
    /// Just directly contains an error message.
    #[error("{0}")]
    Bare(Cow<'static, str>),
}

impl From<&'static str> for Error {
    fn from(value: &'static str) -> Self {
        Self::Bare(Cow::Borrowed(value))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Bare(Cow::Owned(value))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
