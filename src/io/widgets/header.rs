use crate::{
    io::{fmt::Text, screen::Screen, XY},
    text,
};

/// The bar across the top row of every frame: game name on the left, the current screen's title on the right.
///
/// e.g.:
/// ```text
///  The Pirate Quest                                              Current Location
/// ```
pub struct Header<'a> {
    screen: &'a mut Screen,
    game: String,
    title: String,
}

impl<'a> Header<'a> {
    pub fn new(screen: &'a mut Screen) -> Self {
        Self {
            screen,
            game: String::new(),
            title: String::new(),
        }
    }

    crate::util::setters! {
        game(name: &str) => game = name.into(),
        title(name: &str) => title = name.into(),
    }
}

impl<'a> Drop for Header<'a> {
    fn drop(&mut self) {
        let width = self.screen.size().x();
        if width == 0 || self.screen.size().y() == 0 {
            return;
        }
        let bar: Vec<Text> = text!(black on_white "{0:1$}"("", width));
        self.screen.write(XY(0, 0), bar);
        self.screen
            .write(XY(1, 0), text!(bold black on_white "{}"(self.game)));
        let title_len = self.title.chars().count();
        let right_align = width.saturating_sub(title_len + 1);
        self.screen
            .write(XY(right_align, 0), text!(black on_white "{}"(self.title)));
    }
}

#[cfg(test)]
mod test {
    use crate::io::{
        fmt::{Color, Formatted},
        screen::Screen,
        XY,
    };

    #[test]
    fn header_fills_the_top_row() {
        let mut sc = Screen::new(XY(30, 2));
        sc.header().game("Quest").title("Intro");
        assert_eq!(sc.row_text(0), " Quest                  Intro ");
        assert!(sc[0].iter().all(|c| c.get_fmt().bg == Color::White));
        assert!(sc[0][1].get_fmt().bold);
        assert_eq!(sc.row_text(1), " ".repeat(30));
    }
}
