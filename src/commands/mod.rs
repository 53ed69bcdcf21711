//! Command implementations for the blueprint CLI

pub mod common;
pub mod grades;
pub mod lineup;
pub mod market;

use crate::{BlueprintError, LeagueId, Result, LEAGUE_ID_ENV_VAR};


/// Use the given league id, falling back to `FFL_BLUEPRINT_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| BlueprintError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}
