//! Everything the player sees during normal play goes through [`ConsoleView`].
//!
//! Each screen is a [`Frame`]: header, body text, an action menu on the right, and a footer with a message row, a
//! prompt row and a status row. The view keeps the current frame around so it can be drawn again whenever the
//! display changes.

use crate::{
    action::{ActionMenu, PlayerAction},
    constants::{
        gameplay::{MAX_AGE, MAX_GENDER_LEN, MAX_NAME_LEN, MAX_NUMBER_LEN, MAX_YES_NO_LEN},
        graphics::{BODY_INDENT, FOOTER_HEIGHT, GAME_TITLE, HEADER_HEIGHT, MENU_WIDTH, MIN_SIZE},
    },
    content, cutscenes,
    error::{Error, Result},
    io::{
        fmt::Text,
        screen::Screen,
        sys::IoSystem,
        text_input::{TextInput, TextInputRequest},
        Action, Key, XY,
    },
    player::{Gender, Player},
    text,
    world::{IslandLocation, LocationId, Universe},
};

/// Everything currently on screen.
#[derive(Clone, Debug)]
pub struct Frame {
    pub title: String,
    pub body: Vec<Text>,
    pub menu: ActionMenu,
    /// Shown in red; used for mistakes the player can fix.
    pub message: String,
    pub prompt: Vec<Text>,
    pub status: Vec<Text>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: vec![],
            menu: ActionMenu::MISSION_INTRO,
            message: String::new(),
            prompt: vec![],
            status: vec![],
        }
    }
}

/// Changes the player asked for on the edit screen. `None` fields were left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerEdit {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub personality: Option<bool>,
}

impl PlayerEdit {
    pub fn apply(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(age) = self.age {
            player.age = age;
        }
        if let Some(gender) = self.gender {
            player.gender = gender;
        }
        if let Some(personality) = self.personality {
            player.personality = personality;
        }
    }
}

/// What became of a single free-text prompt.
enum Answer<T> {
    /// Blank line; keep whatever was there.
    Keep,
    Value(T),
    /// Escape was pressed.
    Cancel,
}

pub struct ConsoleView<'io> {
    io: &'io mut dyn IoSystem,
    screen: Screen,
    frame: Frame,
}

impl<'io> ConsoleView<'io> {
    pub fn new(io: &'io mut dyn IoSystem) -> Self {
        let screen = Screen::new(io.size());
        Self {
            io,
            screen,
            frame: Frame::default(),
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Render the current frame and push it to the display.
    pub fn draw(&mut self) -> Result<()> {
        let size = self.io.size();
        self.screen.resize(size);
        if !size.fits(MIN_SIZE) {
            self.screen
                .textbox(text![
                    bright_red "The terminal is too small to play in.\n",
                    "Please enlarge it to at least {}x{}.\n"(MIN_SIZE.x(), MIN_SIZE.y()),
                    "It's {}x{} right now."(size.x(), size.y()),
                ])
                .pos(1, 1);
            return self.io.draw(&self.screen);
        }

        let frame = &self.frame;
        let screen = &mut self.screen;
        screen.header().game(GAME_TITLE).title(&frame.title);
        screen.horizontal(HEADER_HEIGHT - 1);

        let footer = size.y() - FOOTER_HEIGHT;
        let menu_x = size.x() - MENU_WIDTH;
        let rule_x = menu_x - 1;
        screen
            .textbox(frame.body.clone())
            .pos(BODY_INDENT, HEADER_HEIGHT + 1)
            .width(rule_x - BODY_INDENT - 1)
            .height(footer - HEADER_HEIGHT - 1);
        screen.vertical(rule_x).start(HEADER_HEIGHT).end(footer);

        let mut y = HEADER_HEIGHT + 1;
        screen
            .textbox(text![bold bright_white "{}"(frame.menu.title)])
            .pos(menu_x + 1, y)
            .width(MENU_WIDTH - 1);
        y += 2;
        for choice in frame.menu.choices {
            screen.write(
                XY(menu_x + 2, y),
                text![bright_white "{}"(choice.key), "  {}"(choice.label)],
            );
            y += 1;
        }

        screen.horizontal(footer);
        screen.write(XY(1, footer + 1), text![bright_red "{}"(frame.message)]);
        screen.write(XY(1, footer + 2), frame.prompt.clone());
        screen.write(XY(1, footer + 3), frame.status.clone());
        self.io.draw(&self.screen)
    }

    /// Show the title splash. Returns whether the player wants to play.
    pub fn splash(&mut self) -> Result<bool> {
        cutscenes::splash(self.io, &mut self.screen)
    }

    /// Switch to a new screen, clearing any leftover message or prompt.
    pub fn game_play_screen(&mut self, title: &str, body: Vec<Text>, menu: ActionMenu) -> Result<()> {
        self.frame.title = title.into();
        self.frame.body = body;
        self.frame.menu = menu;
        self.frame.message.clear();
        self.frame.prompt.clear();
        self.draw()
    }

    /// Update the status row. Shown from the next draw on.
    pub fn set_status(&mut self, player: &Player, location: &IslandLocation) {
        self.frame.status = text![
            bold bright_yellow "{}"(player.name),
            bright_black " | ",
            "coin ", bright_yellow "{}"(player.coin),
            bright_black " | ",
            bright_cyan "{}"(location.common_name),
        ];
    }

    /// Report a mistake the player can fix.
    pub fn input_error(&mut self, message: &str) -> Result<()> {
        tracing::debug!(message, "input rejected");
        self.frame.message = message.into();
        self.draw()
    }

    /// Wait for the next action, drawing again whenever the display asks.
    fn next_action(&mut self) -> Result<Action> {
        loop {
            match self.io.input()? {
                Action::Redraw => self.draw()?,
                Action::Unknown(what) => tracing::trace!(input = %what, "ignoring unknown input"),
                Action::Error(e) => return Err(Error::from(e)),
                other => return Ok(other),
            }
        }
    }

    /// Wait for any key at all.
    pub fn continue_key(&mut self) -> Result<()> {
        self.frame.prompt = text![bright_black "Press any key to continue."];
        self.draw()?;
        match self.next_action()? {
            Action::Closed => Err(Error::Closed),
            _ => {
                self.frame.prompt.clear();
                Ok(())
            }
        }
    }

    /// Read one choice from `menu`. Keys that aren't on it, and redraw requests, are [`PlayerAction::None`]; the
    /// display closing counts as choosing to exit.
    pub fn action_menu_choice(&mut self, menu: ActionMenu) -> Result<PlayerAction> {
        self.frame.menu = menu;
        self.frame.prompt = text![bright_black "Choose an action: ", bright_white "{}"(keys_of(&menu))];
        self.draw()?;
        let choice = match self.io.input()? {
            Action::KeyPress { key: Key::Char(c) } => menu.choice(c),
            Action::KeyPress { .. } | Action::Redraw => PlayerAction::None,
            Action::Closed => PlayerAction::Exit,
            Action::Unknown(what) => {
                tracing::trace!(input = %what, "ignoring unknown input");
                PlayerAction::None
            }
            Action::Error(e) => return Err(Error::from(e)),
        };
        if choice != PlayerAction::None {
            self.frame.message.clear();
        }
        Ok(choice)
    }

    /// Run a single-line prompt until it's submitted or cancelled. `None` means cancelled.
    fn prompt_line(&mut self, prompt: &str, max_len: usize) -> Result<Option<String>> {
        let mut ti = TextInput::new(prompt, max_len);
        self.frame.prompt = ti.render();
        self.draw()?;
        loop {
            let action = self.next_action()?;
            if action == Action::Closed {
                return Err(Error::Closed);
            }
            match ti.action(action) {
                TextInputRequest::Nothing => (),
                TextInputRequest::Redraw => {
                    self.frame.prompt = ti.render();
                    self.draw()?;
                }
                TextInputRequest::Cancel => {
                    self.frame.prompt.clear();
                    return Ok(None);
                }
                TextInputRequest::Line(line) => {
                    self.frame.prompt.clear();
                    return Ok(Some(line));
                }
            }
        }
    }

    /// Prompt until `parse` accepts the line, showing its complaint inline each time it doesn't. Blank lines and
    /// Escape are handed back as-is.
    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        max_len: usize,
        parse: impl Fn(&str) -> core::result::Result<T, &'static str>,
    ) -> Result<Answer<T>> {
        loop {
            let line = match self.prompt_line(prompt, max_len)? {
                None => return Ok(Answer::Cancel),
                Some(line) => line,
            };
            let line = line.trim();
            if line.is_empty() {
                return Ok(Answer::Keep);
            }
            match parse(line) {
                Ok(v) => {
                    self.frame.message.clear();
                    return Ok(Answer::Value(v));
                }
                Err(msg) => self.input_error(msg)?,
            }
        }
    }

    /// Ask for the pirate's name during setup. Blank names are refused.
    pub fn pirate_name(&mut self) -> Result<String> {
        self.game_play_screen("Quest Setup", content::mission_name_prompt(), ActionMenu::MISSION_INTRO)?;
        loop {
            match self.prompt_line("Pirate name: ", MAX_NAME_LEN)? {
                Some(name) if !name.trim().is_empty() => {
                    self.frame.message.clear();
                    return Ok(name.trim().into());
                }
                // Escape just clears the line; there's no playing without a name
                _ => self.input_error("Every pirate needs a name. Please enter one.")?,
            }
        }
    }

    /// Walk through the editable fields one by one. Blank keeps a field as it was; Escape stops editing, keeping
    /// whatever was already changed.
    pub fn edit_player(&mut self, player: &Player) -> Result<PlayerEdit> {
        self.game_play_screen("Edit Pirate Info", content::edit_player(player), ActionMenu::MISSION_INTRO)?;
        let mut edit = PlayerEdit::default();

        macro_rules! field {
            ( $field:ident: $prompt:expr, $len:expr, $parse:expr ) => {
                match self.prompt_parsed($prompt, $len, $parse)? {
                    Answer::Value(v) => edit.$field = Some(v),
                    Answer::Keep => (),
                    Answer::Cancel => return Ok(edit),
                }
            };
        }

        field!(name: &format!("Name [{}]: ", player.name), MAX_NAME_LEN, |s| Ok(s.to_owned()));
        field!(age: &format!("Age [{}]: ", player.age), MAX_NUMBER_LEN, parse_age);
        field!(gender: &format!("Gender (M/F/U) [{}]: ", player.gender), MAX_GENDER_LEN, |s| {
            Gender::parse(s).ok_or("Gender must be M, F or U.")
        });
        let personality = format!("Good-natured? (Y/N) [{}]: ", yes_no(player.personality));
        field!(personality: &personality, MAX_YES_NO_LEN, parse_yes_no);
        Ok(edit)
    }

    /// Ask where to sail from `current`. `None` if the player changed their mind.
    pub fn next_island_location(
        &mut self,
        player: &Player,
        universe: &Universe,
        current: &IslandLocation,
    ) -> Result<Option<LocationId>> {
        self.game_play_screen("Travel", content::travel(player, universe, current), ActionMenu::MISSION_INTRO)?;
        loop {
            let answer = self.prompt_parsed("Destination ID: ", MAX_NUMBER_LEN, |s| {
                let id = s.parse().map(LocationId).map_err(|_| "Please enter a number from the list.")?;
                if id == current.id {
                    Err("You're already here. Pick somewhere else.")
                } else if universe.get(id).is_none() {
                    Err("There's no island with that ID.")
                } else {
                    Ok(id)
                }
            })?;
            match answer {
                Answer::Value(id) => return Ok(Some(id)),
                Answer::Cancel => return Ok(None),
                Answer::Keep => self.input_error("Please enter a destination ID, or press Escape to stay.")?,
            }
        }
    }

    /// The farewell screen; waits for a key.
    pub fn closing(&mut self, player: &Player) -> Result<()> {
        cutscenes::closing(self.io, &mut self.screen, &player.name, &player.ship_name)
    }
}

fn keys_of(menu: &ActionMenu) -> String {
    menu.choices.iter().map(|c| c.key).collect()
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Y"
    } else {
        "N"
    }
}

fn parse_age(s: &str) -> core::result::Result<u32, &'static str> {
    match s.parse() {
        Ok(age) if (1..=MAX_AGE).contains(&age) => Ok(age),
        _ => Err("Age must be a whole number from 1 to 150."),
    }
}

fn parse_yes_no(s: &str) -> core::result::Result<bool, &'static str> {
    match s.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("Please answer Y or N."),
    }
}

#[cfg(test)]
mod test {
    use crate::{config::PlayerDefaults, io::sys::test::ScriptedIo};

    use super::*;

    fn pirate() -> Player {
        let mut p = Player::new(&PlayerDefaults::default(), LocationId(1));
        p.name = "Calico Jack".into();
        p
    }

    #[test]
    fn frame_layout() {
        let mut io = ScriptedIo::new();
        let mut view = ConsoleView::new(&mut io);
        let u = Universe::default();
        let here = u.get(LocationId(1)).unwrap();
        view.set_status(&pirate(), here);
        view.game_play_screen("Current Location", content::current_location(here), ActionMenu::MAIN)
            .unwrap();
        drop(view);

        let frame = io.last_frame();
        assert_eq!(frame.len(), 24);
        assert!(frame[0].starts_with(" The Pirate Quest"));
        assert!(frame[0].trim_end().ends_with("Current Location"));
        assert!(frame[1].chars().all(|c| c == '-'));
        assert!(frame[3].contains("You are docked at Port Royal."));
        assert!(frame[3].contains("Pirate Actions"));
        assert!(frame[5].contains("1  Look Around"));
        assert!(frame[11].contains("0  Exit"));
        assert_eq!(frame[10].chars().nth(80 - MENU_WIDTH - 1), Some('|'));
        assert!(frame[20].chars().all(|c| c == '-'));
        assert!(frame[23].contains("Calico Jack | coin 1000000 | Port Royal"));
    }

    #[test]
    fn tiny_terminal_gets_a_notice() {
        let mut io = ScriptedIo::new().with_size(30, 10);
        let mut view = ConsoleView::new(&mut io);
        view.game_play_screen("Whatever", text!["body"], ActionMenu::MAIN).unwrap();
        drop(view);
        assert!(io.ever_showed("too small"));
        assert!(!io.ever_showed("body"));
    }

    #[test]
    fn menu_choice_reads_keys() {
        let mut io = ScriptedIo::new().keys("2x").key(Key::Up).closed();
        let mut view = ConsoleView::new(&mut io);
        assert_eq!(view.action_menu_choice(ActionMenu::MAIN).unwrap(), PlayerAction::Travel);
        assert_eq!(view.action_menu_choice(ActionMenu::MAIN).unwrap(), PlayerAction::None);
        assert_eq!(view.action_menu_choice(ActionMenu::MAIN).unwrap(), PlayerAction::None);
        assert_eq!(view.action_menu_choice(ActionMenu::MAIN).unwrap(), PlayerAction::Exit);
    }

    #[test]
    fn input_error_is_shown_until_next_action() {
        let mut io = ScriptedIo::new().keys("91");
        let mut view = ConsoleView::new(&mut io);
        view.game_play_screen("Here", vec![], ActionMenu::MAIN).unwrap();
        view.input_error("no ship").unwrap();
        assert_eq!(view.frame().message, "no ship");
        view.action_menu_choice(ActionMenu::MAIN).unwrap();
        assert_eq!(view.frame().message, "no ship");
        view.action_menu_choice(ActionMenu::MAIN).unwrap();
        assert_eq!(view.frame().message, "");
    }

    #[test]
    fn blank_names_are_refused() {
        let mut io = ScriptedIo::new().line("   ").key(Key::Escape).line(" Anne Bonny ");
        let mut view = ConsoleView::new(&mut io);
        assert_eq!(view.pirate_name().unwrap(), "Anne Bonny");
        drop(view);
        // once for the blank line, once for Escape, then it stays up while the real name is typed
        assert!(io.count_frames("Every pirate needs a name") > 2);
    }

    #[test]
    fn closing_mid_prompt_is_an_error() {
        let mut io = ScriptedIo::new().keys("Ann").closed();
        let mut view = ConsoleView::new(&mut io);
        assert!(matches!(view.pirate_name(), Err(Error::Closed)));
    }

    #[test]
    fn edit_keeps_blank_fields() {
        let mut io = ScriptedIo::new().line("").line("abc").line("200").line("33").line("").line("n");
        let mut view = ConsoleView::new(&mut io);
        let edit = view.edit_player(&pirate()).unwrap();
        drop(view);
        assert_eq!(
            edit,
            PlayerEdit {
                name: None,
                age: Some(33),
                gender: None,
                personality: Some(false),
            }
        );
        assert!(io.ever_showed("Age must be a whole number from 1 to 150."));
    }

    #[test]
    fn edit_gender_is_capped() {
        let mut io = ScriptedIo::new().line("").line("").line("Unspecified pirate").line("yes");
        let mut view = ConsoleView::new(&mut io);
        let edit = view.edit_player(&pirate()).unwrap();
        drop(view);
        assert_eq!(edit.gender, Some(Gender::Unspecified));
        assert_eq!(edit.personality, Some(true));
        assert!(!io.ever_showed("Unspecified p"));
    }

    #[test]
    fn edit_escape_keeps_earlier_changes() {
        let mut io = ScriptedIo::new().line("Jack").key(Key::Escape);
        let mut view = ConsoleView::new(&mut io);
        let edit = view.edit_player(&pirate()).unwrap();
        assert_eq!(edit.name.as_deref(), Some("Jack"));
        assert_eq!(edit.age, None);

        let mut p = pirate();
        edit.apply(&mut p);
        assert_eq!(p.name, "Jack");
        assert_eq!(p.age, 50);
    }

    #[test]
    fn destination_is_validated() {
        let u = Universe::default();
        let here = u.get(LocationId(1)).unwrap();
        let mut io = ScriptedIo::new().line("abc").line("1").line("9").line("").line("3");
        let mut view = ConsoleView::new(&mut io);
        assert_eq!(
            view.next_island_location(&pirate(), &u, here).unwrap(),
            Some(LocationId(3))
        );
        drop(view);
        assert!(io.ever_showed("Please enter a number from the list."));
        assert!(io.ever_showed("You're already here."));
        assert!(io.ever_showed("There's no island with that ID."));
        assert!(io.ever_showed("or press Escape to stay."));
    }

    #[test]
    fn destination_escape_stays() {
        let u = Universe::default();
        let here = u.get(LocationId(1)).unwrap();
        let mut io = ScriptedIo::new().keys("2").key(Key::Escape);
        let mut view = ConsoleView::new(&mut io);
        assert_eq!(view.next_island_location(&pirate(), &u, here).unwrap(), None);
    }

    #[test]
    fn redraw_repeats_the_frame() {
        let mut io = ScriptedIo::new().action(Action::Redraw).keys("k");
        let mut view = ConsoleView::new(&mut io);
        view.game_play_screen("Intro", text!["hello"], ActionMenu::MISSION_INTRO).unwrap();
        view.continue_key().unwrap();
        drop(view);
        // screen change, prompt shown, redraw
        assert_eq!(io.frames.len(), 3);
        assert_eq!(io.frames[1], io.frames[2]);
    }
}
