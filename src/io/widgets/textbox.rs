use crate::io::{
    fmt::Text,
    screen::Screen,
    XY,
};

/// A box of word-wrapped text. Renders when dropped.
///
/// Newlines in the text start new paragraphs. Words too long for a whole line get hyphenated.
pub struct Textbox<'a> {
    screen: Option<&'a mut Screen>,
    chunks: Vec<Text>,
    pos: XY,
    width: Option<usize>,
    height: Option<usize>,
}

/// Byte index of the `n`th char, or the end of the string.
fn char_idx(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

impl<'a> Textbox<'a> {
    pub fn new(screen: &'a mut Screen, text: Vec<Text>) -> Self {
        Self {
            screen: Some(screen),
            chunks: text,
            pos: XY(0, 0),
            width: None,
            height: None,
        }
    }

    crate::util::setters! {
        pos(x: usize, y: usize) => pos = XY(x, y),
        width(w: usize) => width = Some(w),
        height(h: usize) => height = Some(h),
    }

    /// Split the text into word-wrapped lines `width` wide.
    fn wrap(&mut self, width: usize) -> Vec<Vec<Text>> {
        // break the chunks into paragraphs on newlines
        let mut paragraphs = vec![];
        let mut cur_para = vec![];
        for mut chunk in std::mem::take(&mut self.chunks) {
            while let Some((line, rest)) = chunk.text.split_once('\n') {
                cur_para.push(chunk.with_text(line.into()));
                paragraphs.push(std::mem::take(&mut cur_para));
                chunk.text = rest.into();
            }
            if !chunk.text.is_empty() {
                cur_para.push(chunk);
            }
        }
        paragraphs.push(cur_para);

        let mut lines = vec![];
        for para in paragraphs {
            let mut line = vec![];
            let mut pos = 0;
            let mut line_start = true;
            for mut chunk in para {
                while pos + chunk.width() > width {
                    let space_left = width - pos;
                    let fits = &chunk.text[..char_idx(&chunk.text, space_left + 1)];
                    let (line_end, rest) = if let Some(idx) = fits.rfind(char::is_whitespace) {
                        // break at the last space that fits
                        let after = idx + fits[idx..].chars().next().map_or(1, char::len_utf8);
                        (chunk.text[..idx].to_owned(), chunk.text[after..].to_owned())
                    } else if !line_start {
                        // the word doesn't fit here but might on a fresh line
                        (String::new(), std::mem::take(&mut chunk.text))
                    } else if space_left > 1 {
                        let split = char_idx(&chunk.text, space_left - 1);
                        (format!("{}-", &chunk.text[..split]), chunk.text[split..].to_owned())
                    } else {
                        let split = char_idx(&chunk.text, 1);
                        (chunk.text[..split].to_owned(), chunk.text[split..].to_owned())
                    };
                    chunk.text = rest;
                    if !line_end.is_empty() {
                        line.push(chunk.with_text(line_end));
                    }
                    lines.push(std::mem::take(&mut line));
                    pos = 0;
                    line_start = true;
                }
                if !chunk.text.is_empty() {
                    pos += chunk.width();
                    line.push(chunk);
                    line_start = false;
                }
            }
            lines.push(line);
        }
        lines
    }

    fn draw(&mut self, screen: &mut Screen) {
        let XY(x, mut y) = self.pos;
        let room = screen.size().saturating_sub(self.pos);
        let width = self.width.unwrap_or(room.x()).min(room.x());
        let height = self.height.unwrap_or(room.y()).min(room.y());
        if width == 0 {
            return;
        }
        for line in self.wrap(width).into_iter().take(height) {
            screen.write(XY(x, y), line);
            y += 1;
        }
    }
}

impl<'a> Drop for Textbox<'a> {
    fn drop(&mut self) {
        if let Some(screen) = self.screen.take() {
            self.draw(screen);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        io::{
            fmt::{Color, Formatted},
            screen::Screen,
            XY,
        },
        text,
    };

    fn rows(sc: &Screen) -> Vec<String> {
        (0..sc.size().y()).map(|y| sc.row_text(y)).collect()
    }

    #[test]
    fn blank_textbox_renders_nothing() {
        let mut sc = Screen::new(XY(10, 3));
        sc.textbox(vec![]);
        assert!(rows(&sc).iter().all(|r| r.trim().is_empty()));
    }

    #[test]
    fn textbox_wraps_on_spaces() {
        let mut sc = Screen::new(XY(10, 5));
        sc.textbox(text!("these are some words"));
        assert_eq!(rows(&sc)[0], "these are ");
        assert_eq!(rows(&sc)[1], "some words");
        assert_eq!(rows(&sc)[2], "          ");
    }

    #[test]
    fn textbox_wrap_carries_formatting() {
        let mut sc = Screen::new(XY(20, 5));
        sc.textbox(text!("sail to ", green "Tortuga ", "and ", red "Nassau")).pos(2, 1).width(10);
        assert_eq!(sc.row_text(1), "  sail to           ");
        assert_eq!(sc.row_text(2), "  Tortuga           ");
        assert_eq!(sc.row_text(3), "  and Nassau        ");
        assert_eq!(sc[2][2].get_fmt().fg, Color::Green);
        assert_eq!(sc[3][2].get_fmt().fg, Color::White);
        assert_eq!(sc[3][6].get_fmt().fg, Color::Red);
    }

    #[test]
    fn textbox_hyphenates_long_words() {
        let mut sc = Screen::new(XY(6, 3));
        sc.textbox(text!("abcdefghij"));
        assert_eq!(rows(&sc), vec!["abcde-", "fghij ", "      "]);
    }

    #[test]
    fn textbox_newlines_start_paragraphs() {
        let mut sc = Screen::new(XY(12, 4));
        sc.textbox(text!("one\n\ntwo three four"));
        assert_eq!(sc.row_text(0), "one         ");
        assert_eq!(sc.row_text(1), "            ");
        assert_eq!(sc.row_text(2), "two three   ");
        assert_eq!(sc.row_text(3), "four        ");
    }

    #[test]
    fn textbox_height_truncates() {
        let mut sc = Screen::new(XY(10, 5));
        sc.textbox(text!("these are some words which will wrap")).pos(0, 1).height(2);
        assert_eq!(sc.row_text(0), "          ");
        assert_eq!(sc.row_text(1), "these are ");
        assert_eq!(sc.row_text(2), "some words");
        assert_eq!(sc.row_text(3), "          ");
    }
}
