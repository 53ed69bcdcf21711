use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::types::{PlayerId, Position, RosterId};
use crate::error::{BlueprintError, Result};
use crate::grades::TeamRoster;
use crate::roster::{Player, PlayerCatalog, RosterSettings};


/// Player record as served by `/players/nfl`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperPlayer {
    pub player_id: PlayerId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub fantasy_positions: Option<Vec<String>>,
    #[serde(default)]
    pub team: Option<String>,
}

impl SleeperPlayer {
    /// Convert to a catalog player, or `None` for non-skill positions and
    /// placeholder records.
    pub fn into_player(self) -> Option<Player> {
        let position: Position = self.position.as_deref()?.parse().ok()?;
        let first_name = self.first_name.unwrap_or_default();
        let last_name = self.last_name.unwrap_or_default();
        if last_name == "Invalid" || first_name == "Duplicate" {
            return None;
        }

        let fantasy_positions: BTreeSet<Position> = self
            .fantasy_positions
            .unwrap_or_default()
            .iter()
            .filter_map(|p| p.parse().ok())
            .collect();

        Some(Player {
            id: self.player_id,
            first_name,
            last_name,
            position,
            fantasy_positions,
            team: self.team,
        })
    }
}

/// Build the session catalog from the raw `/players/nfl` map.
pub fn build_catalog(raw: HashMap<String, SleeperPlayer>) -> PlayerCatalog {
    let total = raw.len();
    let catalog: PlayerCatalog = raw
        .into_values()
        .filter_map(SleeperPlayer::into_player)
        .collect();
    debug!(total, kept = catalog.len(), "built player catalog");
    catalog
}

/// League metadata from `/league/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub roster_positions: Vec<String>,
    #[serde(default)]
    pub total_rosters: u32,
}

impl League {
    pub fn roster_settings(&self) -> RosterSettings {
        RosterSettings::from_roster_positions(&self.roster_positions)
    }

    pub fn size(&self) -> usize {
        self.total_rosters as usize
    }
}

/// One team from `/league/{id}/rosters`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: RosterId,
    #[serde(default)]
    pub owner_id: Option<String>,
    /// `null` for empty rosters.
    #[serde(default)]
    pub players: Option<Vec<PlayerId>>,
}

impl Roster {
    pub fn player_ids(&self) -> &[PlayerId] {
        self.players.as_deref().unwrap_or(&[])
    }

    pub fn to_team(&self) -> TeamRoster {
        TeamRoster {
            roster_id: self.roster_id,
            player_ids: self.player_ids().to_vec(),
        }
    }
}

pub fn find_roster(rosters: &[Roster], roster_id: RosterId) -> Result<&Roster> {
    rosters
        .iter()
        .find(|r| r.roster_id == roster_id)
        .ok_or(BlueprintError::RosterNotFound {
            roster_id: roster_id.as_u32(),
        })
}
