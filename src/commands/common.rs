//! Input loading shared by every command.
//!
//! Commands resolve all of their inputs here (rankings, player catalog,
//! league rosters and slot settings) before handing them to the pure
//! lineup and grade functions.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    cli::CommonArgs,
    grades::GradeContext,
    rankings::{RankList, Rankings, SeasonRankRow, WeeklyRankRow, WeeklyRankings},
    roster::{Player, PlayerCatalog, RosterSettings},
    sleeper::{
        find_roster, load_or_fetch_league, load_or_fetch_players, load_or_fetch_rosters, League,
        Roster, SleeperClient,
    },
    PlayerId, Result, RosterId,
};

use super::resolve_league_id;

/// Every roster of the loaded league plus the one being analyzed.
#[derive(Debug, Clone)]
pub struct LeagueRosters {
    pub league: League,
    pub roster_id: RosterId,
    pub rosters: Vec<Roster>,
}

/// Fully loaded inputs for one command run.
#[derive(Debug, Clone)]
pub struct Session {
    pub catalog: PlayerCatalog,
    pub rankings: Rankings,
    pub settings: RosterSettings,
    pub league_size: usize,
    pub roster: Vec<PlayerId>,
    pub league: Option<LeagueRosters>,
}

impl Session {
    pub fn is_superflex(&self) -> bool {
        self.settings.is_superflex()
    }

    pub fn grade_context(&self) -> GradeContext {
        GradeContext::new(self.is_superflex(), self.league_size)
    }
}

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Season rankings are required; weekly rankings are optional.
pub fn load_rankings(season: &Path, weekly: Option<&Path>) -> Result<Rankings> {
    let season_rows: Vec<SeasonRankRow> = read_json(season)?;
    let season = RankList::from_season_rows(season_rows);
    debug!(entries = season.len(), "loaded season rankings");

    let weekly = match weekly {
        Some(path) => {
            let rows: Vec<WeeklyRankRow> = read_json(path)?;
            Some(WeeklyRankings::from_rows(&rows))
        }
        None => None,
    };

    Ok(Rankings::new(season, weekly))
}

/// Slot overrides win over league settings; with neither, standard settings apply.
pub fn resolve_settings(overrides: Option<&RosterSettings>, league: Option<&League>) -> RosterSettings {
    overrides
        .cloned()
        .or_else(|| league.map(League::roster_settings))
        .unwrap_or_else(RosterSettings::standard)
}

/// Load everything a command needs from its arguments.
pub async fn load_session(args: &CommonArgs) -> Result<Session> {
    let rankings = load_rankings(&args.rankings, args.weekly.as_deref())?;
    let client = SleeperClient::new();

    let catalog: PlayerCatalog = match &args.catalog {
        Some(path) => read_json::<Vec<Player>>(path)?.into_iter().collect(),
        None => load_or_fetch_players(&client, args.refresh).await?,
    };
    debug!(players = catalog.len(), "player catalog ready");

    let league = match args.roster_id {
        Some(roster_id) => {
            let league_id = resolve_league_id(args.league_id)?;
            let league = load_or_fetch_league(&client, league_id, args.refresh).await?;
            let rosters = load_or_fetch_rosters(&client, league_id, args.refresh).await?;
            info!(league = %league_id, rosters = rosters.len(), "loaded league");
            Some(LeagueRosters {
                league,
                roster_id,
                rosters,
            })
        }
        None => None,
    };

    let roster = match &league {
        Some(l) => find_roster(&l.rosters, l.roster_id)?.player_ids().to_vec(),
        None => args.players.clone(),
    };

    let settings = resolve_settings(args.slots.as_ref(), league.as_ref().map(|l| &l.league));
    let league_size = match &league {
        Some(l) if l.league.size() > 0 => l.league.size(),
        Some(l) => l.rosters.len(),
        None => args.league_size,
    };

    Ok(Session {
        catalog,
        rankings,
        settings,
        league_size,
        roster,
        league,
    })
}
