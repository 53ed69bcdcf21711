//! Player reference data and lookup.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::cli::types::{PlayerId, Position, RosterSlot};

/// A rostered NFL player.
///
/// `fantasy_positions` is the set of positions the player may be slotted at;
/// it is empty when the upstream record carries no eligibility data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    #[serde(default)]
    pub fantasy_positions: BTreeSet<Position>,
    #[serde(default)]
    pub team: Option<String>,
}

impl Player {
    /// `"First Last"`, the key every rank feed is indexed by.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_eligible_for(&self, slot: RosterSlot) -> bool {
        slot.eligible_positions()
            .iter()
            .any(|p| self.fantasy_positions.contains(p))
    }

    pub fn is_eligible_at(&self, position: Position) -> bool {
        self.fantasy_positions.contains(&position)
    }

    /// Short display label: `"J. Allen (QB)"`.
    pub fn short_label(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{}. {} ({})", initial, self.last_name, self.position),
            None => format!("{} ({})", self.last_name, self.position),
        }
    }
}

/// Resolves player ids to reference data.
///
/// Unknown ids resolve to `None` and are skipped by every consumer.
pub trait PlayerLookup {
    fn player(&self, id: &PlayerId) -> Option<&Player>;
}

impl PlayerLookup for HashMap<PlayerId, Player> {
    fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.get(id)
    }
}

/// The session's player catalog, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct PlayerCatalog {
    players: HashMap<PlayerId, Player>,
}

impl PlayerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player: Player) {
        self.players.insert(player.id.clone(), player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// All players, ordered by id.
    pub fn into_players(self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.into_values().collect();
        players.sort_by(|a, b| a.id.cmp(&b.id));
        players
    }
}

impl PlayerLookup for PlayerCatalog {
    fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }
}

impl FromIterator<Player> for PlayerCatalog {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        let mut catalog = PlayerCatalog::new();
        for player in iter {
            catalog.insert(player);
        }
        catalog
    }
}
