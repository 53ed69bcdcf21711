//! Sleeper league data: wire types, the HTTP client and cached loaders.

pub mod http;
pub mod types;

use crate::cli::types::LeagueId;
use crate::core::{league_path, load_or_fetch, players_path, rosters_path};
use crate::roster::{Player, PlayerCatalog};
use crate::Result;

pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use types::{build_catalog, find_roster, League, Roster, SleeperPlayer};

/// League metadata from cache, or from Sleeper when missing or `refresh` is set.
pub async fn load_or_fetch_league(client: &SleeperClient, league_id: LeagueId, refresh: bool) -> Result<League> {
    load_or_fetch(&league_path(league_id), refresh, || client.get_league(league_id)).await
}

pub async fn load_or_fetch_rosters(
    client: &SleeperClient,
    league_id: LeagueId,
    refresh: bool,
) -> Result<Vec<Roster>> {
    load_or_fetch(&rosters_path(league_id), refresh, || client.get_rosters(league_id)).await
}

/// Player catalog. Only the filtered catalog is cached, not the raw
/// multi-megabyte player map.
pub async fn load_or_fetch_players(client: &SleeperClient, refresh: bool) -> Result<PlayerCatalog> {
    let players: Vec<Player> = load_or_fetch(&players_path(), refresh, || async {
        let raw = client.get_players().await?;
        Ok(build_catalog(raw).into_players())
    })
    .await?;

    Ok(players.into_iter().collect())
}
