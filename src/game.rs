//! The control loop: owns the pirate and the islands, and turns menu choices into changes and screens.

use crate::{
    action::{ActionMenu, PlayerAction},
    config::GameConfig,
    content,
    error::Result,
    io::sys::IoSystem,
    player::Player,
    view::ConsoleView,
    world::{IslandLocation, LocationId, Universe},
};

/// Shown when trying to travel without a ship.
pub const NO_SHIP: &str = "You currently do not own a ship needed to travel. Obtain a ship, and try again.";

/// How a session ended, when it ended normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player turned down the splash screen and never started.
    Declined,
    /// The player chose to exit from the main menu.
    Finished,
}

/// One play-through of the game.
pub struct Session {
    player: Player,
    universe: Universe,
    current: LocationId,
}

/// Look up an island that has to exist. The player can only ever be somewhere real, so anything else is a bug.
fn locate(universe: &Universe, id: LocationId) -> &IslandLocation {
    match universe.get(id) {
        Some(loc) => loc,
        None => panic!("location {} isn't in the universe", id),
    }
}

impl Session {
    /// A session over the default islands.
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_universe(config, Universe::default())
    }

    /// Fails if the configured start location isn't one of the islands.
    pub fn with_universe(config: &GameConfig, universe: Universe) -> Result<Self> {
        let start = config.start_location;
        if universe.get(start).is_none() {
            return Err(format!("start location {} isn't one of the {} islands", start, universe.len()).into());
        }
        Ok(Self {
            player: Player::new(&config.player, start),
            universe,
            current: start,
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn current_location(&self) -> &IslandLocation {
        locate(&self.universe, self.current)
    }

    /// Play the whole game: splash, setup, then turns until the player exits.
    pub fn run(&mut self, io: &mut dyn IoSystem) -> Result<Outcome> {
        let mut view = ConsoleView::new(io);
        if !view.splash()? {
            tracing::info!("splash screen declined");
            return Ok(Outcome::Declined);
        }

        view.game_play_screen("Quest Intro", content::quest_intro(), ActionMenu::MISSION_INTRO)?;
        view.continue_key()?;

        self.player.name = view.pirate_name()?;
        tracing::info!(name = %self.player.name, "pirate named");
        let here = locate(&self.universe, self.current);
        view.set_status(&self.player, here);
        view.game_play_screen(
            "Quest Setup - Complete",
            content::mission_echo(&self.player),
            ActionMenu::MISSION_INTRO,
        )?;
        view.continue_key()?;

        view.game_play_screen("Current Location", content::current_location(here), ActionMenu::MAIN)?;
        loop {
            self.current = self.player.location;
            let here = locate(&self.universe, self.current);
            if self.player.visit(here.id) {
                tracing::info!(id = %here.id, name = %here.common_name, "new location visited");
            }
            view.set_status(&self.player, here);

            let choice = view.action_menu_choice(ActionMenu::MAIN)?;
            tracing::debug!(?choice, "menu choice");
            match choice {
                PlayerAction::None => (),
                PlayerAction::LookAround => {
                    view.game_play_screen("Look Around", content::look_around(here), ActionMenu::MAIN)?
                }
                PlayerAction::PlayerInfo => view.game_play_screen(
                    "Pirate Info",
                    content::pirate_info(&self.player, here),
                    ActionMenu::MAIN,
                )?,
                PlayerAction::ListDestinations => view.game_play_screen(
                    "Destinations",
                    content::destinations(&self.universe),
                    ActionMenu::MAIN,
                )?,
                PlayerAction::PirateLocationsVisited => view.game_play_screen(
                    "Locations Visited",
                    content::locations_visited(&self.player, &self.universe),
                    ActionMenu::MAIN,
                )?,
                PlayerAction::EditPlayerInfo => {
                    let edit = view.edit_player(&self.player)?;
                    tracing::info!(?edit, "pirate info edited");
                    edit.apply(&mut self.player);
                    view.set_status(&self.player, here);
                    view.game_play_screen("Current Location", content::current_location(here), ActionMenu::MAIN)?;
                }
                PlayerAction::Travel => {
                    if !self.player.ship_owner() {
                        view.input_error(NO_SHIP)?;
                        continue;
                    }
                    let dest = match view.next_island_location(&self.player, &self.universe, here)? {
                        Some(dest) => dest,
                        None => {
                            tracing::debug!("travel cancelled");
                            view.game_play_screen(
                                "Current Location",
                                content::current_location(here),
                                ActionMenu::MAIN,
                            )?;
                            continue;
                        }
                    };
                    self.player.location = dest;
                    self.current = dest;
                    let there = locate(&self.universe, dest);
                    tracing::info!(from = %here.common_name, to = %there.common_name, "travelled");
                    view.set_status(&self.player, there);
                    view.game_play_screen("Current Location", content::current_location(there), ActionMenu::MAIN)?;
                }
                PlayerAction::Exit => {
                    view.closing(&self.player)?;
                    tracing::info!(visited = self.player.visited().count(), "pirate retired");
                    return Ok(Outcome::Finished);
                }
            }
        }
    }
}
