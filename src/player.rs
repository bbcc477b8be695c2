//! The pirate: who they are, what they own, and where they've been.

use std::{collections::BTreeSet, fmt};

use serde::Deserialize;

use crate::{config::PlayerDefaults, world::LocationId};

/// What the pirate sails. `None` means they don't have a ship, and can't travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum ShipType {
    #[default]
    None,
    Sloop,
    Brigantine,
    Frigate,
    Galleon,
    BritishManOWar,
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Sloop => "Sloop",
            Self::Brigantine => "Brigantine",
            Self::Frigate => "Frigate",
            Self::Galleon => "Galleon",
            Self::BritishManOWar => "British Man-o'-War",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum WeaponType {
    #[default]
    None,
    Cutlass,
    Flintlock,
    Cannon,
    Dynamite,
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "bare hands",
            Self::Cutlass => "Cutlass",
            Self::Flintlock => "Flintlock",
            Self::Cannon => "Cannon",
            Self::Dynamite => "Dynamite",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse what a player typed into the edit prompt. Only the first letter matters.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().chars().next()?.to_ascii_lowercase() {
            'm' => Some(Self::Male),
            'f' => Some(Self::Female),
            'u' => Some(Self::Unspecified),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unspecified => "Unspecified",
        })
    }
}

/// The pirate being played. Only the control loop changes this.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Good-natured, or not.
    pub personality: bool,
    pub coin: u64,
    pub ship_name: String,
    pub ship: ShipType,
    pub weapon: WeaponType,
    pub location: LocationId,
    visited: BTreeSet<LocationId>,
}

impl Player {
    /// A nameless pirate set up with the given defaults, standing at `start` and having been nowhere yet.
    pub fn new(defaults: &PlayerDefaults, start: LocationId) -> Self {
        Self {
            name: String::new(),
            age: defaults.age,
            gender: defaults.gender,
            personality: defaults.personality,
            coin: defaults.coin,
            ship_name: defaults.ship_name.clone(),
            ship: defaults.ship,
            weapon: defaults.weapon,
            location: start,
            visited: BTreeSet::new(),
        }
    }

    /// Whether the pirate has a ship to travel with.
    pub fn ship_owner(&self) -> bool {
        self.ship != ShipType::None
    }

    /// Remember that the pirate has been to `id`. Returns whether it was new.
    pub fn visit(&mut self, id: LocationId) -> bool {
        self.visited.insert(id)
    }

    pub fn has_visited(&self, id: LocationId) -> bool {
        self.visited.contains(&id)
    }

    /// Every location visited so far, in ascending id order.
    pub fn visited(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.visited.iter().copied()
    }

    pub fn personality_text(&self) -> &'static str {
        if self.personality {
            "good-natured"
        } else {
            "ill-tempered"
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pirate() -> Player {
        Player::new(&PlayerDefaults::default(), LocationId(1))
    }

    #[test]
    fn starts_from_defaults() {
        let p = pirate();
        assert_eq!(p.name, "");
        assert_eq!(p.age, 50);
        assert_eq!(p.gender, Gender::Male);
        assert!(p.personality);
        assert_eq!(p.coin, 1_000_000);
        assert_eq!(p.ship, ShipType::BritishManOWar);
        assert_eq!(p.ship_name, "Queen Anne's Revenge");
        assert_eq!(p.weapon, WeaponType::Dynamite);
        assert_eq!(p.location, LocationId(1));
        assert_eq!(p.visited().count(), 0);
    }

    #[test]
    fn ship_owner_follows_ship_type() {
        let mut p = pirate();
        for ship in [
            ShipType::Sloop,
            ShipType::Brigantine,
            ShipType::Frigate,
            ShipType::Galleon,
            ShipType::BritishManOWar,
        ] {
            p.ship = ship;
            assert!(p.ship_owner(), "{:?} should count as a ship", ship);
        }
        p.ship = ShipType::None;
        assert!(!p.ship_owner());
    }

    #[test]
    fn visiting_twice_counts_once() {
        let mut p = pirate();
        assert!(p.visit(LocationId(3)));
        assert!(!p.visit(LocationId(3)));
        assert!(p.visit(LocationId(1)));
        assert!(p.has_visited(LocationId(3)));
        assert!(!p.has_visited(LocationId(2)));
        assert_eq!(p.visited().collect::<Vec<_>>(), vec![LocationId(1), LocationId(3)]);
    }

    #[test]
    fn gender_parses_first_letter() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse(" F"), Some(Gender::Female));
        assert_eq!(Gender::parse("u"), Some(Gender::Unspecified));
        assert_eq!(Gender::parse("x"), None);
        assert_eq!(Gender::parse(""), None);
    }
}
