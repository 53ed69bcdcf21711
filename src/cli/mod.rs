//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::roster::RosterSettings;
use types::{LeagueId, PlayerId, RankMode, RosterId, TeamOutlook};

/// League size assumed when no league is loaded.
pub const DEFAULT_LEAGUE_SIZE: usize = 12;

/// Roster, league and rankings inputs shared by every command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// League ID (or set `FFL_BLUEPRINT_LEAGUE_ID` env var). Only read with `--roster-id`.
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Analyze this league roster.
    #[clap(long, short)]
    pub roster_id: Option<RosterId>,

    /// Analyze an explicit roster instead (repeatable): `-p 4984 -p 9509`.
    #[clap(long = "player", short = 'p', conflicts_with = "roster_id")]
    pub players: Vec<PlayerId>,

    /// Override slot requirements, e.g. `QB=1,RB=2,WR=3,TE=1,FLEX=2,BENCH=6`.
    #[clap(long)]
    pub slots: Option<RosterSettings>,

    /// Teams in the league when no league is loaded.
    #[clap(long, default_value_t = DEFAULT_LEAGUE_SIZE)]
    pub league_size: usize,

    /// Season consensus rankings (JSON array of `{"Player", "Position"}` rows).
    #[clap(long)]
    pub rankings: PathBuf,

    /// Weekly rankings (JSON array of `{"1QB", "SF"}` rows).
    #[clap(long)]
    pub weekly: Option<PathBuf>,

    /// Read the player catalog from a JSON file instead of Sleeper.
    #[clap(long)]
    pub catalog: Option<PathBuf>,

    /// Force refresh from Sleeper, overwriting the cache.
    #[clap(long)]
    pub refresh: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project the starting lineup and bench for a roster.
    Lineup {
        #[clap(flatten)]
        common: CommonArgs,

        /// Rank feed used to order players.
        #[clap(long, value_enum, default_value_t = RankMode::default())]
        mode: RankMode,
    },

    /// Grade a roster by position and classify its build.
    ///
    /// With `--roster-id` every roster in the league is graded and the
    /// roster's standing at each position is reported.
    Grades {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Show buy/sell/hold targets and verdicts for the roster's players.
    Market {
        #[clap(flatten)]
        common: CommonArgs,

        /// Buy/sell/hold export (JSON array).
        #[clap(long)]
        market: PathBuf,

        /// Team direction to read verdicts for.
        #[clap(long, value_enum, default_value_t = TeamOutlook::default())]
        outlook: TeamOutlook,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-blueprint",
    about = "Dynasty fantasy football roster blueprints"
)]
pub struct Blueprint {
    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::RosterSlot;

    #[test]
    fn test_parse_lineup_with_explicit_roster() {
        let app = Blueprint::try_parse_from([
            "ffl-blueprint",
            "lineup",
            "--rankings",
            "ranks.json",
            "-p",
            "4984",
            "-p",
            "9509",
            "--slots",
            "QB=1,RB=2,BENCH=3",
            "--mode",
            "weekly",
        ])
        .unwrap();

        match app.command {
            Commands::Lineup { common, mode } => {
                assert_eq!(mode, RankMode::Weekly);
                assert_eq!(common.players, vec![PlayerId::new("4984"), PlayerId::new("9509")]);
                assert_eq!(common.slots.unwrap().count(RosterSlot::Bench), 3);
                assert_eq!(common.league_size, DEFAULT_LEAGUE_SIZE);
                assert!(common.roster_id.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_market_defaults() {
        let app = Blueprint::try_parse_from([
            "ffl-blueprint",
            "market",
            "--rankings",
            "ranks.json",
            "--market",
            "bsh.json",
            "-l",
            "1180244",
            "-r",
            "3",
        ])
        .unwrap();

        match app.command {
            Commands::Market {
                common, outlook, ..
            } => {
                assert_eq!(outlook, TeamOutlook::Contend);
                assert_eq!(common.league_id, Some(LeagueId::new(1180244)));
                assert_eq!(common.roster_id, Some(RosterId::new(3)));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_roster_id_conflicts_with_players() {
        let result = Blueprint::try_parse_from([
            "ffl-blueprint",
            "grades",
            "--rankings",
            "ranks.json",
            "-r",
            "1",
            "-p",
            "4984",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rankings_required() {
        assert!(Blueprint::try_parse_from(["ffl-blueprint", "grades"]).is_err());
    }

    #[test]
    fn test_bad_slot_override_rejected() {
        let result = Blueprint::try_parse_from([
            "ffl-blueprint",
            "grades",
            "--rankings",
            "ranks.json",
            "--slots",
            "KICKER=1",
        ]);
        assert!(result.is_err());
    }
}
