use std::mem;

use crate::text;

use super::{
    fmt::Text,
    input::{Action, Key},
};

/// Indicates what the text input needs from its owner
#[derive(Debug, PartialEq, Eq)]
pub enum TextInputRequest {
    /// Action doesn't require any response.
    Nothing,
    /// The line changed, so it needs to be redrawn.
    Redraw,
    /// User gave up on the prompt by pressing Escape.
    Cancel,
    /// User has submitted a line by pressing Enter.
    Line(String),
}

/// A single-line text editor, for the handful of free-text prompts (names, ages, destinations).
#[derive(Clone, Default)]
pub struct TextInput {
    /// prompt displayed before the user's text
    prompt: String,
    /// line currently being typed
    line: String,
    /// cursor position in the line being typed, in chars
    cursor: usize,
    /// the most chars the line can hold
    max_len: usize,
}

impl TextInput {
    /// Create a new text input, holding at most `max_len` characters.
    pub fn new(prompt: &str, max_len: usize) -> Self {
        Self {
            prompt: prompt.into(),
            line: String::new(),
            cursor: 0,
            max_len,
        }
    }

    fn len(&self) -> usize {
        self.line.chars().count()
    }

    /// Byte offset of the `n`th char in the line.
    fn offset(&self, n: usize) -> usize {
        self.line.char_indices().nth(n).map_or(self.line.len(), |(i, _)| i)
    }

    fn keypress(&mut self, key: Key) -> TextInputRequest {
        match key {
            Key::Char(ch) if !ch.is_control() && self.len() < self.max_len => {
                let at = self.offset(self.cursor);
                self.line.insert(at, ch);
                self.cursor += 1;
            }
            Key::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.offset(self.cursor);
                self.line.remove(at);
            }
            Key::Delete if self.cursor < self.len() => {
                let at = self.offset(self.cursor);
                self.line.remove(at);
            }
            Key::Left if self.cursor > 0 => self.cursor -= 1,
            Key::Right if self.cursor < self.len() => self.cursor += 1,
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.len(),
            Key::Escape => return TextInputRequest::Cancel,
            Key::Enter => {
                self.cursor = 0;
                return TextInputRequest::Line(mem::take(&mut self.line));
            }
            _ => return TextInputRequest::Nothing,
        }
        TextInputRequest::Redraw
    }

    /// Handles an [`Action`] aimed at the prompt.
    pub fn action(&mut self, action: Action) -> TextInputRequest {
        match action {
            Action::KeyPress { key } => self.keypress(key),
            Action::Redraw => TextInputRequest::Redraw,
            _ => TextInputRequest::Nothing,
        }
    }

    /// Builds the prompt line for rendering, with the cursor underlined.
    pub fn render(&self) -> Vec<Text> {
        let split = self.offset(self.cursor);
        if self.cursor == self.len() {
            text![
                "{}"(self.prompt),
                bright_white "{}"(self.line),
                bright_white underline " ",
            ]
        } else {
            let after = self.offset(self.cursor + 1);
            text![
                "{}"(self.prompt),
                bright_white "{}"(&self.line[..split]),
                bright_white underline "{}"(&self.line[split..after]),
                bright_white "{}"(&self.line[after..]),
            ]
        }
    }
}

#[cfg(test)]
mod test {
    use crate::io::fmt::plain;

    use super::*;

    fn feed(ti: &mut TextInput, s: &str) {
        for ch in s.chars() {
            assert_eq!(ti.action(Key::Char(ch).into()), TextInputRequest::Redraw);
        }
    }

    #[test]
    fn typing_and_enter_submits_line() {
        let mut ti = TextInput::new("> ", 20);
        feed(&mut ti, "Anne Bonny");
        assert_eq!(plain(&ti.render()), "> Anne Bonny ");
        assert_eq!(ti.action(Key::Enter.into()), TextInputRequest::Line("Anne Bonny".into()));
        assert_eq!(plain(&ti.render()), ">  ");
    }

    #[test]
    fn editing_in_the_middle() {
        let mut ti = TextInput::new("", 20);
        feed(&mut ti, "Blakbeard");
        for _ in 0..6 {
            ti.action(Key::Left.into());
        }
        feed(&mut ti, "c");
        ti.action(Key::End.into());
        ti.action(Key::Backspace.into());
        ti.action(Key::Home.into());
        ti.action(Key::Delete.into());
        assert_eq!(ti.action(Key::Enter.into()), TextInputRequest::Line("lackbear".into()));
    }

    #[test]
    fn cursor_is_underlined() {
        use crate::io::fmt::Formatted;
        let mut ti = TextInput::new("> ", 20);
        feed(&mut ti, "abc");
        ti.action(Key::Left.into());
        let rendered = ti.render();
        assert_eq!(rendered[2].text, "c");
        assert!(rendered[2].get_fmt().underline);
        assert!(!rendered[1].get_fmt().underline);
    }

    #[test]
    fn max_len_is_enforced() {
        let mut ti = TextInput::new("", 3);
        feed(&mut ti, "123");
        assert_eq!(ti.action(Key::Char('4').into()), TextInputRequest::Nothing);
        assert_eq!(ti.action(Key::Enter.into()), TextInputRequest::Line("123".into()));
    }

    #[test]
    fn escape_cancels() {
        let mut ti = TextInput::new("", 3);
        assert_eq!(ti.action(Key::Escape.into()), TextInputRequest::Cancel);
        assert_eq!(ti.action(Key::Up.into()), TextInputRequest::Nothing);
        assert_eq!(ti.action(Action::Closed), TextInputRequest::Nothing);
    }
}
