//! Terminal text formatting: colors, bold/underline, and the formatted [`Text`] and [`Cell`] types.
//!
//! Only the lowest common subset of terminal features is supported: the 16 basic ANSI colors for foreground and
//! background, bold, and underline. Most code should build formatted text through [`text!`](crate::text) rather than
//! touching these types directly.

/// The color of a piece of formatted text. The numeric values are the ANSI color codes for each color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 60,
    BrightRed = 61,
    BrightGreen = 62,
    BrightYellow = 63,
    BrightBlue = 64,
    BrightMagenta = 65,
    BrightCyan = 66,
    BrightWhite = 67,
}

/// The format of a single formatted item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    /// The foreground color of the item
    pub fg: Color,
    /// The background color of the item
    pub bg: Color,
    /// Whether it's bolded or not
    pub bold: bool,
    /// Whether it's underlined or not
    pub underline: bool,
}

impl Format {
    /// Plain white-on-black, what everything starts as.
    pub const NONE: Self = Format {
        fg: Color::White,
        bg: Color::Black,
        bold: false,
        underline: false,
    };
}

impl Default for Format {
    fn default() -> Self {
        Self::NONE
    }
}

/// Implemented by everything that carries a [`Format`].
pub trait Formatted {
    fn get_fmt(&self) -> &Format;
    fn get_fmt_mut(&mut self) -> &mut Format;
}

macro_rules! fmt_fn {
    ( $(
        $name:ident $(( $( $arg:ident: $type:ty ),* $(,)? ))? => $field:ident = $val:expr
    ),* $(,)? ) => { $(
        #[must_use]
        fn $name(mut self $($(, $arg: $type )*)? ) -> Self {
            self.get_fmt_mut().$field = $val;
            self
        }
    )* };
}

/// Chainable formatting operations on anything [`Formatted`].
pub trait FormattedExt: Formatted + Sized {
    /// Copy another item's formatting into this one. The two don't need to be the same type.
    #[must_use]
    fn fmt_of(mut self, rhs: &dyn Formatted) -> Self {
        *self.get_fmt_mut() = rhs.get_fmt().clone();
        self
    }

    fmt_fn! {
        fg(c: Color) => fg = c,                         bg(c: Color) => bg = c,
        black => fg = Color::Black,                     on_black => bg = Color::Black,
        bright_black => fg = Color::BrightBlack,
        red => fg = Color::Red,
        bright_red => fg = Color::BrightRed,
        green => fg = Color::Green,
        bright_green => fg = Color::BrightGreen,
        yellow => fg = Color::Yellow,
        bright_yellow => fg = Color::BrightYellow,
        blue => fg = Color::Blue,                       on_blue => bg = Color::Blue,
        bright_blue => fg = Color::BrightBlue,
        cyan => fg = Color::Cyan,
        bright_cyan => fg = Color::BrightCyan,
        white => fg = Color::White,                     on_white => bg = Color::White,
        bright_white => fg = Color::BrightWhite,
        underline => underline = true,
        bold => bold = true,
    }
}

impl<F: Formatted> FormattedExt for F {}

/// A run of formatted text. Usually built as a `Vec<Text>` through [`text!`](crate::text).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    pub text: String,
    fmt: Format,
}

impl Text {
    pub const fn of(text: String) -> Self {
        Self {
            text,
            fmt: Format::NONE,
        }
    }

    pub fn plain(s: &str) -> Self {
        Self::of(s.into())
    }

    /// The same formatting, with different contents.
    pub fn with_text(&self, new_text: String) -> Text {
        Text {
            text: new_text,
            fmt: self.fmt.clone(),
        }
    }

    /// How many cells this text takes up on screen.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl Formatted for Text {
    fn get_fmt(&self) -> &Format {
        &self.fmt
    }
    fn get_fmt_mut(&mut self) -> &mut Format {
        &mut self.fmt
    }
}

/// A single formatted character, as stored in a [`Screen`](super::Screen).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    fmt: Format,
}

impl Cell {
    /// A blank cell with default formatting.
    pub const BLANK: Cell = Cell::of(' ');

    pub const fn of(ch: char) -> Self {
        Self {
            ch,
            fmt: Format::NONE,
        }
    }
}

impl Formatted for Cell {
    fn get_fmt(&self) -> &Format {
        &self.fmt
    }
    fn get_fmt_mut(&mut self) -> &mut Format {
        &mut self.fmt
    }
}

/// Concatenate the contents of some formatted text, dropping the formatting.
pub fn plain(text: &[Text]) -> String {
    text.iter().map(|t| t.text.as_str()).collect()
}

/// Create a single [`Text`].
#[macro_export]
macro_rules! text1 {
    [
        $( $name:ident )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ] => {
        {
            #[allow(unused_imports)]
            use $crate::io::fmt::FormattedExt as _;
            $crate::io::fmt::Text::of(
                format!( $text $(, $( $arg ),* )? )
            ) $( . $name () )*
        }
    };
}

/// Create a `Vec` of formatted [`Text`]s, e.g. `text!("you have ", bold yellow "{}"(coin), " coin")`.
#[macro_export]
macro_rules! text {
    [ $(
        $( $name:ident )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ),* $(,)? ] => {
        {
            #[allow(unused_imports)]
            use $crate::io::fmt::FormattedExt as _;
            vec![
                $(
                    $crate::io::fmt::Text::of(
                        format!( $text $(, $( $arg ),* )? )
                    ) $( . $name () )*
                ),*
            ]
        }
    };
}

/// Create a formatted [`Cell`].
#[macro_export]
macro_rules! cell {
    [ $( $name:ident )* $char:literal ] => {
        {
            #[allow(unused_imports)]
            use $crate::io::fmt::FormattedExt as _;
            $crate::io::fmt::Cell::of($char) $( .$name() )*
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn text_macro_applies_formatting_in_order() {
        let coin = 12;
        let t = text!("you have ", bold yellow "{}"(coin), " coin");
        assert_eq!(t.len(), 3);
        assert_eq!(t[0].get_fmt(), &Format::NONE);
        assert_eq!(t[1].text, "12");
        assert!(t[1].get_fmt().bold);
        assert_eq!(t[1].get_fmt().fg, Color::Yellow);
        assert_eq!(plain(&t), "you have 12 coin");
    }

    #[test]
    fn cell_copies_text_format() {
        let t = text1!(red on_white "x");
        let c = Cell::of('y').fmt_of(&t);
        assert_eq!(c.get_fmt().fg, Color::Red);
        assert_eq!(c.get_fmt().bg, Color::White);
        assert_eq!(cell!(red on_white 'y'), c);
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        assert_eq!(Text::plain("18.0°N").width(), 6);
    }
}
