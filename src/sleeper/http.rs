use std::collections::HashMap;

use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cli::types::LeagueId;
use crate::error::{BlueprintError, Result};
use crate::sleeper::types::{League, Roster, SleeperPlayer};

#[cfg(test)]
mod tests;

/// Base path for the public Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Thin client over the read-only Sleeper endpoints.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl Default for SleeperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SleeperClient {
    pub fn new() -> Self {
        Self::with_base_url(SLEEPER_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base}/{path}`. Sleeper answers unknown ids with `200 null`,
    /// which surfaces as [`BlueprintError::NoData`].
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "sleeper request");

        self.client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<Option<T>>()
            .await?
            .ok_or(BlueprintError::NoData)
    }

    pub async fn get_league(&self, league_id: LeagueId) -> Result<League> {
        self.get_json(&format!("league/{}", league_id)).await
    }

    pub async fn get_rosters(&self, league_id: LeagueId) -> Result<Vec<Roster>> {
        self.get_json(&format!("league/{}/rosters", league_id)).await
    }

    /// The full NFL player map, keyed by player id.
    pub async fn get_players(&self) -> Result<HashMap<String, SleeperPlayer>> {
        self.get_json("players/nfl").await
    }
}
