//! The body text of each screen.

use crate::{
    io::fmt::Text,
    player::Player,
    text,
    world::{IslandLocation, Universe},
};

pub fn quest_intro() -> Vec<Text> {
    text![
        "You have been hired by the Brethren Court to chart the islands of the Caribbean and report back on what \
         you find there.\n",
        "\n",
        "You will be given a ship, a crew and a fortune in coin. Sail between the islands, look around, and keep \
         a record of everywhere you've been.\n",
        "\n",
        "Your first task will be to tell us your name.\n",
        "\n",
        bright_white "Press any key to begin.",
    ]
}

/// The prompt text shown while asking for the pirate's name.
pub fn mission_name_prompt() -> Vec<Text> {
    text![
        "Every captain on these seas is known by name, and a name is the first thing the Court will ask for.\n",
        "\n",
        "Enter your pirate's name below, then press Enter.",
    ]
}

/// Echo of the freshly set-up pirate, once they've been named.
pub fn mission_echo(player: &Player) -> Vec<Text> {
    let mut text = text![
        "The Court has your papers, ", bold bright_yellow "{}"(player.name), ".\n",
        "\n",
    ];
    text.extend(pirate_stats(player));
    text.extend(text![
        "\n",
        "Good luck, Captain. Press any key to begin your quest.",
    ]);
    text
}

fn pirate_stats(player: &Player) -> Vec<Text> {
    text![
        "Age:         ", bright_white "{}"(player.age), "\n",
        "Gender:      ", bright_white "{}"(player.gender), "\n",
        "Personality: ", bright_white "{}"(player.personality_text()), "\n",
        "Coin:        ", bright_yellow "{}"(player.coin), "\n",
        "Ship:        ", bright_white "{}"(player.ship_name), " (", bright_white "{}"(player.ship), ")\n",
        "Weapon:      ", bright_white "{}"(player.weapon), "\n",
    ]
}

pub fn current_location(location: &IslandLocation) -> Vec<Text> {
    text![
        "You are docked at ", bold bright_cyan "{}"(location.common_name), ".\n",
        "\n",
        "{}"(location.description), "\n",
        "\n",
        "Choose an action from the menu.",
    ]
}

pub fn look_around(location: &IslandLocation) -> Vec<Text> {
    text![
        "You look around ", bold bright_cyan "{}"(location.common_name), ".\n",
        "\n",
        "{}"(location.description), "\n",
        "\n",
        "Position: ", bright_white "{}"(location.coordinates),
    ]
}

pub fn pirate_info(player: &Player, location: &IslandLocation) -> Vec<Text> {
    let mut text = text![
        "Name:        ", bold bright_yellow "{}"(player.name), "\n",
    ];
    text.extend(pirate_stats(player));
    text.extend(text![
        "Location:    ", bright_cyan "{}"(location.common_name), "\n",
    ]);
    text
}

/// Every island, as `id  name  coordinates` lines.
pub fn destinations(universe: &Universe) -> Vec<Text> {
    let mut text = text!["ID  Island               Position\n", "\n"];
    for loc in universe.locations() {
        text.extend(text![
            bright_white "{:<4}"(loc.id),
            bright_cyan "{:<21}"(loc.common_name),
            "{}\n"(loc.coordinates),
        ]);
    }
    text
}

pub fn locations_visited(player: &Player, universe: &Universe) -> Vec<Text> {
    let mut text = text!["Islands you have visited:\n", "\n"];
    for id in player.visited() {
        let name = universe.get(id).map_or("(uncharted)", |l| l.common_name.as_str());
        text.extend(text![bright_white "{:<4}"(id), bright_cyan "{}\n"(name)]);
    }
    text
}

/// Shown while picking where to sail next.
pub fn travel(player: &Player, universe: &Universe, from: &IslandLocation) -> Vec<Text> {
    let mut text = text![
        "The ", bright_white "{}"(player.ship_name), " is ready to sail from ",
        bright_cyan "{}"(from.common_name), ".\n",
        "\n",
    ];
    for loc in universe.locations().filter(|l| l.id != from.id) {
        text.extend(text![bright_white "{:<4}"(loc.id), "{}\n"(loc.common_name)]);
    }
    text.extend(text!["\n", "Enter the ID of your destination, or press Escape to stay."]);
    text
}

pub fn edit_player(player: &Player) -> Vec<Text> {
    let mut text = text![
        "Change your pirate's details. Leave a field blank to keep its current value.\n",
        "\n",
        "Name:        ", bold bright_yellow "{}"(player.name), "\n",
    ];
    text.extend(pirate_stats(player));
    text
}

#[cfg(test)]
mod test {
    use crate::{config::PlayerDefaults, io::fmt::plain, world::LocationId};

    use super::*;

    fn pirate() -> Player {
        let mut p = Player::new(&PlayerDefaults::default(), LocationId(1));
        p.name = "Mary Read".into();
        p
    }

    #[test]
    fn destinations_lists_every_island() {
        let u = Universe::default();
        let text = plain(&destinations(&u));
        for loc in u.locations() {
            assert!(text.contains(&loc.common_name));
        }
        assert!(text.contains("18.0°N 76.8°W"));
    }

    #[test]
    fn travel_leaves_out_current_island() {
        let u = Universe::default();
        let here = u.get(LocationId(1)).unwrap();
        let text = plain(&travel(&pirate(), &u, here));
        assert!(!text.contains("Port Royal\n"));
        assert!(text.contains("Tortuga"));
    }

    #[test]
    fn visited_in_id_order() {
        let u = Universe::default();
        let mut p = pirate();
        p.visit(LocationId(3));
        p.visit(LocationId(1));
        let text = plain(&locations_visited(&p, &u));
        let royal = text.find("Port Royal").unwrap();
        let nassau = text.find("Nassau").unwrap();
        assert!(royal < nassau);
        assert!(!text.contains("Tortuga"));
    }

    #[test]
    fn pirate_info_shows_stats() {
        let u = Universe::default();
        let text = plain(&pirate_info(&pirate(), u.get(LocationId(1)).unwrap()));
        assert!(text.contains("Mary Read"));
        assert!(text.contains("1000000"));
        assert!(text.contains("Queen Anne's Revenge"));
        assert!(text.contains("Dynamite"));
    }
}
