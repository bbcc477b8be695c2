//! What the pirate can choose to do each turn, and the menus offering those choices.

/// One command chosen from a menu. Every turn of the game handles exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayerAction {
    /// Nothing recognizable was chosen.
    #[default]
    None,
    LookAround,
    Travel,
    PlayerInfo,
    EditPlayerInfo,
    ListDestinations,
    PirateLocationsVisited,
    Exit,
}

/// A single line of an [`ActionMenu`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuChoice {
    pub key: char,
    pub label: &'static str,
    pub action: PlayerAction,
}

/// A fixed menu shown on the right of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionMenu {
    pub title: &'static str,
    pub choices: &'static [MenuChoice],
}

macro_rules! menu {
    ( $title:literal { $( $key:literal => $label:literal: $action:ident ),* $(,)? } ) => {
        ActionMenu {
            title: $title,
            choices: &[ $(
                MenuChoice { key: $key, label: $label, action: PlayerAction::$action }
            ),* ],
        }
    };
}

impl ActionMenu {
    /// Shown during setup, when any key just moves on.
    pub const MISSION_INTRO: Self = menu!("Press any key to continue" {});

    pub const MAIN: Self = menu!("Pirate Actions" {
        '1' => "Look Around": LookAround,
        '2' => "Travel": Travel,
        '3' => "Pirate Info": PlayerInfo,
        '4' => "Edit Pirate Info": EditPlayerInfo,
        '5' => "List Destinations": ListDestinations,
        '6' => "Locations Visited": PirateLocationsVisited,
        '0' => "Exit": Exit,
    });

    /// The action bound to `key`, or [`PlayerAction::None`] if nothing is.
    pub fn choice(&self, key: char) -> PlayerAction {
        self.choices
            .iter()
            .find(|c| c.key == key)
            .map_or(PlayerAction::None, |c| c.action)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn main_menu_keys() {
        let m = ActionMenu::MAIN;
        assert_eq!(m.choice('1'), PlayerAction::LookAround);
        assert_eq!(m.choice('2'), PlayerAction::Travel);
        assert_eq!(m.choice('3'), PlayerAction::PlayerInfo);
        assert_eq!(m.choice('4'), PlayerAction::EditPlayerInfo);
        assert_eq!(m.choice('5'), PlayerAction::ListDestinations);
        assert_eq!(m.choice('6'), PlayerAction::PirateLocationsVisited);
        assert_eq!(m.choice('0'), PlayerAction::Exit);
    }

    #[test]
    fn unknown_keys_are_none() {
        for key in ['7', '9', 'a', ' ', 'q'] {
            assert_eq!(ActionMenu::MAIN.choice(key), PlayerAction::None);
        }
        assert_eq!(ActionMenu::MISSION_INTRO.choice('1'), PlayerAction::None);
    }

    #[test]
    fn keys_are_unique() {
        let keys: std::collections::BTreeSet<_> = ActionMenu::MAIN.choices.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), ActionMenu::MAIN.choices.len());
    }
}
