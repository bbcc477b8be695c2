//! Various constants, for use in various places. Mostly for rendering, but there are a few for other reasons.

/// Constants with gameplay implications, albeit potentially minor.
pub mod gameplay {
    /// The longest name a pirate can have. Mostly used to keep the status line readable.
    pub const MAX_NAME_LEN: usize = 24;
    /// The most digits accepted when typing an age or a destination id.
    pub const MAX_NUMBER_LEN: usize = 3;
    /// Long enough to type out "Unspecified" in full.
    pub const MAX_GENDER_LEN: usize = 11;
    /// Room for "yes".
    pub const MAX_YES_NO_LEN: usize = 3;
    /// Oldest age the edit prompt accepts.
    pub const MAX_AGE: u32 = 150;
}

/// Constants specifically relating to how things render.
pub mod graphics {
    use crate::io::XY;

    /// Shown on the left of the header bar of every frame.
    pub const GAME_TITLE: &str = "The Pirate Quest";
    /// How many rows the header takes up, including the rule under it.
    pub const HEADER_HEIGHT: usize = 2;
    /// How many rows the footer takes up: a rule, the message row, the prompt row and the status row.
    pub const FOOTER_HEIGHT: usize = 4;
    /// Width of the action menu column, not counting the rule to its left.
    pub const MENU_WIDTH: usize = 24;
    /// Indent of the body text from the left edge.
    pub const BODY_INDENT: usize = 2;
    /// Anything smaller than this gets a notice to enlarge the terminal instead of the game.
    pub const MIN_SIZE: XY = XY(60, 18);
    /// Assumed size when the terminal won't say how big it is.
    pub const FALLBACK_SIZE: XY = XY(80, 24);
}
