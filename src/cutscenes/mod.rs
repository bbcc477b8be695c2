//! The full-screen bits outside the normal frame layout: the title splash and the farewell.

use rand::prelude::*;

use crate::{
    constants::graphics::GAME_TITLE,
    error::{Error, Result},
    io::{
        fmt::{Cell, Color, FormattedExt, Text},
        screen::Screen,
        sys::IoSystem,
        Action, Key, XY,
    },
    text,
};

fn rngat(seed: u64, x: usize, y: usize, xor: u64) -> SmallRng {
    let pos_seed = seed ^ xor ^ (x as u64) ^ (y as u64).rotate_left(32);
    // only the appearance of randomness matters, and it has to come out the same on every redraw
    SmallRng::seed_from_u64(pos_seed)
}

fn waveat(seed: u64, x: usize, y: usize) -> Cell {
    const COLORS: [Color; 4] = [Color::Blue, Color::BrightBlue, Color::Cyan, Color::BrightCyan];
    let mut rng = rngat(seed, x, y, 0x5EA5_1DE0_F7AB_1E5);
    if rng.gen_bool(0.15) {
        let fg = COLORS[rng.gen_range(0..COLORS.len())];
        Cell::of('~').fg(fg)
    } else {
        Cell::BLANK
    }
}

/// Fill the screen with a scattering of waves, then center some lines of text over it.
fn draw_sea(screen: &mut Screen, seed: u64, lines: &[Vec<Text>]) {
    let size = screen.size();
    for y in 0..size.y() {
        for x in 0..size.x() {
            screen[y][x] = waveat(seed, x, y);
        }
    }
    let top = size.y().saturating_sub(lines.len() * 2) / 2;
    for (i, line) in lines.iter().enumerate() {
        let width: usize = line.iter().map(Text::width).sum();
        // one blank cell either side so the waves don't touch the text
        let x = size.x().saturating_sub(width + 2) / 2;
        let mut padded = text![" "];
        padded.extend(line.iter().cloned());
        padded.push(Text::plain(" "));
        screen.write(XY(x, top + i * 2), padded);
    }
}

/// Wait for a key, redrawing whenever asked. `Ok(None)` means the display closed.
fn wait_key(io: &mut dyn IoSystem, mut redraw: impl FnMut(&mut dyn IoSystem) -> Result<()>) -> Result<Option<Key>> {
    redraw(io)?;
    loop {
        match io.input()? {
            Action::KeyPress { key } => return Ok(Some(key)),
            Action::Redraw => redraw(io)?,
            Action::Closed => return Ok(None),
            Action::Unknown(what) => tracing::trace!(input = %what, "ignoring unknown input"),
            Action::Error(e) => return Err(Error::from(e)),
        }
    }
}

/// Show the title splash. Returns whether the player wants to play; Escape or closing the display declines.
pub fn splash(io: &mut dyn IoSystem, screen: &mut Screen) -> Result<bool> {
    let seed: u64 = thread_rng().gen();
    let lines = [
        text![bold bright_yellow "{}"(GAME_TITLE)],
        text!["A tale of the Caribbean"],
        text![bright_white "Enter", " to set sail, ", bright_white "Escape", " to stay ashore"],
    ];
    let key = wait_key(io, |io| {
        screen.resize(io.size());
        draw_sea(screen, seed, &lines);
        io.draw(screen)
    })?;
    Ok(!matches!(key, None | Some(Key::Escape)))
}

/// Show the farewell, naming the pirate and their ship, until any key is pressed.
pub fn closing(io: &mut dyn IoSystem, screen: &mut Screen, name: &str, ship_name: &str) -> Result<()> {
    let seed: u64 = thread_rng().gen();
    let lines = [
        text![bold bright_yellow "Fair winds, {}"(name)],
        text!["The ", bright_white "{}"(ship_name), " returns to port."],
        text!["Press any key to leave"],
    ];
    wait_key(io, |io| {
        screen.resize(io.size());
        draw_sea(screen, seed, &lines);
        io.draw(screen)
    })?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::io::sys::test::ScriptedIo;

    use super::*;

    #[test]
    fn enter_plays() {
        let mut io = ScriptedIo::new().key(Key::Enter);
        let mut screen = Screen::new(XY(0, 0));
        assert!(splash(&mut io, &mut screen).unwrap());
        assert!(io.shows(GAME_TITLE));
    }

    #[test]
    fn any_key_plays() {
        let mut io = ScriptedIo::new().keys("x");
        let mut screen = Screen::new(XY(0, 0));
        assert!(splash(&mut io, &mut screen).unwrap());
    }

    #[test]
    fn escape_or_close_declines() {
        let mut screen = Screen::new(XY(0, 0));
        let mut io = ScriptedIo::new().key(Key::Escape);
        assert!(!splash(&mut io, &mut screen).unwrap());
        let mut io = ScriptedIo::new().closed();
        assert!(!splash(&mut io, &mut screen).unwrap());
    }

    #[test]
    fn redraw_draws_again() {
        let mut io = ScriptedIo::new().action(Action::Redraw).key(Key::Enter);
        let mut screen = Screen::new(XY(0, 0));
        splash(&mut io, &mut screen).unwrap();
        assert_eq!(io.frames.len(), 2);
        assert_eq!(io.frames[0], io.frames[1]);
    }

    #[test]
    fn closing_names_pirate_and_ship() {
        let mut io = ScriptedIo::new().keys(" ");
        let mut screen = Screen::new(XY(0, 0));
        closing(&mut io, &mut screen, "Anne", "Revenge").unwrap();
        assert!(io.shows("Fair winds, Anne"));
        assert!(io.shows("The Revenge returns to port."));
    }

    #[test]
    fn waves_are_stable_per_seed() {
        for (x, y) in [(0, 0), (5, 3), (79, 23)] {
            assert_eq!(waveat(42, x, y), waveat(42, x, y));
        }
    }
}
