use crate::{cell, io::screen::Screen};

/// A horizontal rule across one whole row.
pub struct Horizontal<'a> {
    screen: &'a mut Screen,
    row: usize,
}

impl<'a> Horizontal<'a> {
    pub fn new(screen: &'a mut Screen, row: usize) -> Self {
        Horizontal { screen, row }
    }
}

impl<'a> Drop for Horizontal<'a> {
    fn drop(&mut self) {
        if self.row >= self.screen.size().y() {
            return;
        }
        for c in self.screen[self.row].iter_mut() {
            *c = cell!(bright_black '-');
        }
    }
}

#[cfg(test)]
mod test {
    use crate::io::{screen::Screen, XY};

    #[test]
    fn rules_stay_in_their_span() {
        let mut sc = Screen::new(XY(10, 4));
        sc.horizontal(1);
        sc.vertical(8).start(2);
        sc.vertical(3).end(1);
        assert_eq!(sc.row_text(0), "   |      ");
        assert_eq!(sc.row_text(1), "----------");
        assert_eq!(sc.row_text(2), "        | ");
        assert_eq!(sc.row_text(3), "        | ");
    }

    #[test]
    fn offscreen_rules_draw_nothing() {
        let mut sc = Screen::new(XY(4, 2));
        sc.horizontal(9);
        sc.vertical(9);
        assert!(sc.rows().all(|r| r.iter().all(|c| c.ch == ' ')));
    }
}
