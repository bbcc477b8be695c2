use crate::{cell, io::screen::Screen};

/// A vertical rule down all or part of one column.
pub struct Vertical<'a> {
    screen: &'a mut Screen,
    col: usize,
    start: Option<usize>,
    end: Option<usize>,
}

impl<'a> Vertical<'a> {
    pub fn new(screen: &'a mut Screen, col: usize) -> Self {
        Vertical {
            screen,
            col,
            start: None,
            end: None,
        }
    }

    crate::util::setters! {
        start(y: usize) => start = Some(y),
        end(y: usize) => end = Some(y),
    }
}

impl<'a> Drop for Vertical<'a> {
    fn drop(&mut self) {
        let size = self.screen.size();
        if self.col >= size.x() {
            return;
        }
        let end_y = self.end.unwrap_or(size.y()).min(size.y());
        for y in self.start.unwrap_or(0)..end_y {
            self.screen[y][self.col] = cell!(bright_black '|');
        }
    }
}
