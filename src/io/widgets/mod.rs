//! The little pieces every frame is built out of.
//!
//! These are all output-only and render when dropped, so they can be used as one-line statements, e.g.
//! `screen.vertical(40).start(2);`.

mod textbox;
pub use textbox::*;

mod header;
pub use header::*;

mod vertical;
pub use vertical::*;

mod horizontal;
pub use horizontal::*;
