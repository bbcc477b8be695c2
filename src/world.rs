//! The islands the pirate can sail between.

use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

/// Identifies one [`IslandLocation`] in the [`Universe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where an island is on the map, in degrees. North and east are positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f32,
    pub lon: f32,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat < 0.0 { 'S' } else { 'N' };
        let ew = if self.lon < 0.0 { 'W' } else { 'E' };
        write!(f, "{:.1}°{} {:.1}°{}", self.lat.abs(), ns, self.lon.abs(), ew)
    }
}

/// A place the pirate can visit. Never changes once the universe is built.
#[derive(Clone, Debug, PartialEq)]
pub struct IslandLocation {
    pub id: LocationId,
    pub common_name: String,
    pub description: String,
    pub coordinates: Coordinates,
}

/// Every island in the game, keyed by id.
#[derive(Clone, Debug)]
pub struct Universe {
    locations: BTreeMap<LocationId, IslandLocation>,
}

impl Universe {
    /// Build a universe out of some islands. Later islands replace earlier ones with the same id.
    pub fn new(locations: impl IntoIterator<Item = IslandLocation>) -> Self {
        Self {
            locations: locations.into_iter().map(|l| (l.id, l)).collect(),
        }
    }

    pub fn get(&self, id: LocationId) -> Option<&IslandLocation> {
        self.locations.get(&id)
    }

    /// All the islands, in ascending id order.
    pub fn locations(&self) -> impl Iterator<Item = &IslandLocation> + '_ {
        self.locations.values()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

macro_rules! islands {
    ( $( $id:literal: $name:literal @ ($lat:expr, $lon:expr) => $desc:literal ),* $(,)? ) => {
        vec![ $(
            IslandLocation {
                id: LocationId($id),
                common_name: $name.into(),
                description: $desc.into(),
                coordinates: Coordinates { lat: $lat, lon: $lon },
            }
        ),* ]
    };
}

impl Default for Universe {
    /// The six islands of the Caribbean the game ships with.
    fn default() -> Self {
        Self::new(islands! {
            1: "Port Royal" @ (18.0, -76.8) =>
                "The wickedest city on earth. Taverns line the harbor and every captain in the Caribbean comes \
                 here to spend what they've plundered.",
            2: "Tortuga" @ (20.0, -72.8) =>
                "A rocky turtle of an island off Hispaniola, ruled by no one. The brethren of the coast trade \
                 rum, powder and rumours on its docks.",
            3: "Nassau" @ (25.1, -77.3) =>
                "The pirate republic. Its shallow harbor keeps out the navy's big ships but welcomes every sloop \
                 flying the black flag.",
            4: "Isla de Muerta" @ (15.3, -61.4) =>
                "An island that can't be found, except by those who already know where it is. Cursed gold is \
                 said to lie in its caves.",
            5: "Shipwreck Cove" @ (12.1, -68.9) =>
                "A fortress town built from the hulls of a hundred wrecked ships. The Brethren Court meets here \
                 when the seas grow dangerous.",
            6: "Skull Island" @ (17.6, -63.2) =>
                "A barren rock shaped like a grinning skull. Few sail here willingly, and fewer still sail away.",
        })
    }
}
