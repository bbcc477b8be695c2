//! Implements the (crossterm-based) rendering to a terminal.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self as ct, KeyEventKind, KeyModifiers},
    execute,
    style::{
        Attribute, Color as CrosstermColor, ResetColor, SetAttribute, SetAttributes,
        SetBackgroundColor, SetForegroundColor,
    },
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::{
    constants::graphics::FALLBACK_SIZE,
    io::{
        fmt::{Cell, Color as QuestColor, Formatted},
        input::{Action, Key},
        screen::Screen,
        XY,
    },
};

use super::IoSystem;

fn key4ct(code: ct::KeyCode) -> Option<Key> {
    let key = match code {
        ct::KeyCode::Char(c) => Key::Char(c),
        ct::KeyCode::F(n) => Key::F(n),
        ct::KeyCode::Backspace => Key::Backspace,
        ct::KeyCode::Enter => Key::Enter,
        ct::KeyCode::Left => Key::Left,
        ct::KeyCode::Right => Key::Right,
        ct::KeyCode::Up => Key::Up,
        ct::KeyCode::Down => Key::Down,
        ct::KeyCode::Home => Key::Home,
        ct::KeyCode::End => Key::End,
        ct::KeyCode::PageUp => Key::PageUp,
        ct::KeyCode::PageDown => Key::PageDown,
        ct::KeyCode::Tab => Key::Tab,
        ct::KeyCode::Delete => Key::Delete,
        ct::KeyCode::Insert => Key::Insert,
        ct::KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(key)
}

/// Turn one crossterm event into an [`Action`], or `None` if it's something the game ignores (key releases, focus).
fn action4ct(ev: ct::Event) -> Option<Action> {
    match ev {
        ct::Event::Key(ct::KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            // raw mode swallows the usual SIGINT, so handle it here
            if modifiers.contains(KeyModifiers::CONTROL)
                && matches!(code, ct::KeyCode::Char('c') | ct::KeyCode::Char('d'))
            {
                return Some(Action::Closed);
            }
            match key4ct(code) {
                Some(key) => Some(Action::KeyPress { key }),
                None => Some(Action::Unknown(format!("key {:?}", code))),
            }
        }
        ct::Event::Resize(..) | ct::Event::FocusGained => Some(Action::Redraw),
        _ => None,
    }
}

/// Crossterm color for game colors
fn ct4q_color(q: QuestColor) -> CrosstermColor {
    match q {
        QuestColor::BrightBlack => CrosstermColor::DarkGrey,
        QuestColor::Black => CrosstermColor::Black,
        QuestColor::BrightRed => CrosstermColor::Red,
        QuestColor::Red => CrosstermColor::DarkRed,
        QuestColor::BrightGreen => CrosstermColor::Green,
        QuestColor::Green => CrosstermColor::DarkGreen,
        QuestColor::BrightYellow => CrosstermColor::Yellow,
        QuestColor::Yellow => CrosstermColor::DarkYellow,
        QuestColor::BrightBlue => CrosstermColor::Blue,
        QuestColor::Blue => CrosstermColor::DarkBlue,
        QuestColor::BrightMagenta => CrosstermColor::Magenta,
        QuestColor::Magenta => CrosstermColor::DarkMagenta,
        QuestColor::BrightCyan => CrosstermColor::Cyan,
        QuestColor::Cyan => CrosstermColor::DarkCyan,
        QuestColor::BrightWhite => CrosstermColor::White,
        QuestColor::White => CrosstermColor::Grey,
    }
}

/// Queue up a single row of cells, only emitting formatting changes where they happen.
fn render_row(row: &[Cell], out: &mut Vec<u8>) -> io::Result<()> {
    let first = match row.first() {
        Some(c) => c.get_fmt(),
        None => return Ok(()),
    };
    let (mut fg, mut bg) = (first.fg, first.bg);
    let (mut bold, mut underline) = (first.bold, first.underline);
    let attrs = [
        if bold { Attribute::Bold } else { Attribute::NormalIntensity },
        if underline { Attribute::Underlined } else { Attribute::NoUnderline },
    ];
    crossterm::queue!(
        out,
        ResetColor,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(ct4q_color(fg)),
        SetBackgroundColor(ct4q_color(bg)),
        SetAttributes(attrs.as_ref().into()),
    )?;

    let mut ch_b = [0u8; 4];
    for cell in row {
        let f = cell.get_fmt();
        if f.fg != fg {
            fg = f.fg;
            crossterm::queue!(out, SetForegroundColor(ct4q_color(fg)))?;
        }
        if f.bg != bg {
            bg = f.bg;
            crossterm::queue!(out, SetBackgroundColor(ct4q_color(bg)))?;
        }
        if f.bold != bold {
            bold = f.bold;
            let attr = if bold { Attribute::Bold } else { Attribute::NormalIntensity };
            crossterm::queue!(out, SetAttribute(attr))?;
        }
        if f.underline != underline {
            underline = f.underline;
            let attr = if underline { Attribute::Underlined } else { Attribute::NoUnderline };
            crossterm::queue!(out, SetAttribute(attr))?;
        }
        out.extend_from_slice(cell.ch.encode_utf8(&mut ch_b).as_bytes());
    }
    Ok(())
}

/// Full-screen rendering in the terminal the game was started from.
///
/// Takes over the terminal (raw mode, alternate screen) when created and gives it back on [`IoSystem::stop`], on
/// drop, or when something panics.
pub struct AnsiIo {
    stopped: bool,
}

impl AnsiIo {
    fn init_term() -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
        )?;
        Ok(())
    }

    fn clean_term() -> io::Result<()> {
        execute!(
            io::stdout(),
            Clear(ClearType::All),
            Show,
            EnableLineWrap,
            LeaveAlternateScreen,
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn get() -> crate::Result<Self> {
        Self::init_term()?;
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            // the panic message is useless if it's printed into the alternate screen
            let _ = Self::clean_term();
            default_hook(info);
        }));
        Ok(Self { stopped: false })
    }
}

impl Drop for AnsiIo {
    fn drop(&mut self) {
        self.stop();
    }
}

impl IoSystem for AnsiIo {
    fn size(&self) -> XY {
        terminal::size().map_or(FALLBACK_SIZE, |(x, y)| XY(x as usize, y as usize))
    }

    fn draw(&mut self, screen: &Screen) -> crate::Result<()> {
        let mut out = vec![];
        crossterm::queue!(&mut out, Clear(ClearType::All))?;
        for (y, row) in screen.rows().enumerate() {
            crossterm::queue!(&mut out, MoveTo(0, y as u16))?;
            render_row(row, &mut out)?;
        }
        crossterm::queue!(&mut out, ResetColor, SetAttribute(Attribute::Reset))?;
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        stdout.write_all(&out)?;
        stdout.flush()?;
        Ok(())
    }

    fn input(&mut self) -> crate::Result<Action> {
        loop {
            let ev = match ct::read() {
                Ok(ev) => ev,
                Err(e) => return Ok(Action::Error(format!("reading input: {}", e))),
            };
            if let Some(action) = action4ct(ev) {
                return Ok(action);
            }
        }
    }

    fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        if let Err(e) = Self::clean_term() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}
