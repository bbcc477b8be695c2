use std::ops;

use super::{
    fmt::{Cell, FormattedExt, Text},
    widgets::{Header, Horizontal, Textbox, Vertical},
    XY,
};

/// A text framebuffer.
///
/// Everything is rendered onto one of these first, then the whole thing is handed to an
/// [`IoSystem`](super::sys::IoSystem) at once. That avoids flickering and partial renders.
pub struct Screen {
    cells: Vec<Cell>,
    size: XY,
}

impl Screen {
    /// Create a new blank `Screen` of the given size.
    pub fn new(size: XY) -> Self {
        let mut res = Self {
            cells: vec![],
            size: XY(0, 0),
        };
        res.resize(size);
        res
    }

    /// How big this Screen is, in characters.
    pub fn size(&self) -> XY {
        self.size
    }

    /// Iterate over the rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // `max(1)` so a zero-width screen doesn't make `chunks` panic; it has no cells anyway
        self.cells.chunks(self.size.x().max(1))
    }

    /// One row of the screen as a plain string, formatting dropped.
    pub fn row_text(&self, row: usize) -> String {
        self[row].iter().map(|c| c.ch).collect()
    }

    /// Resize the screen, clearing its contents at the same time. Does not reallocate unless the screen is growing.
    pub fn resize(&mut self, size: XY) {
        self.cells.truncate(0);
        self.cells.resize(size.x() * size.y(), Cell::BLANK);
        self.size = size;
    }

    /// Write some formatted text at a position. Anything past the right edge is dropped.
    ///
    /// This **does not** handle newlines or wrapping; use [`Self::textbox`] for that.
    pub fn write(&mut self, pos: XY, text: Vec<Text>) {
        let XY(mut x, y) = pos;
        if y >= self.size.y() {
            return;
        }
        for chunk in text {
            for ch in chunk.text.chars() {
                if x >= self.size.x() {
                    return;
                }
                self[y][x] = Cell::of(ch).fmt_of(&chunk);
                x += 1;
            }
        }
    }

    /// Write a header bar to the top row of the screen.
    pub fn header(&mut self) -> Header<'_> {
        Header::new(self)
    }

    /// Write a word-wrapped text box to the screen.
    pub fn textbox(&mut self, text: Vec<Text>) -> Textbox<'_> {
        Textbox::new(self, text)
    }

    /// Draw a vertical line on screen.
    pub fn vertical(&mut self, col: usize) -> Vertical<'_> {
        Vertical::new(self, col)
    }

    /// Draw a horizontal line on screen.
    pub fn horizontal(&mut self, row: usize) -> Horizontal<'_> {
        Horizontal::new(self, row)
    }
}

impl ops::Index<usize> for Screen {
    type Output = [Cell];
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.size.x();
        let end = start + self.size.x();
        &self.cells[start..end]
    }
}

impl ops::IndexMut<usize> for Screen {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * self.size.x();
        let end = start + self.size.x();
        &mut self.cells[start..end]
    }
}
