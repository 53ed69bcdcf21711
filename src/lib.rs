//! Dynasty Fantasy Football Blueprint Library
//!
//! Roster analysis for Sleeper dynasty leagues: projected starting lineups,
//! position grades, roster archetypes and buy/sell/hold market splits.
//!
//! ## Features
//!
//! - **Lineup Projection**: Eligibility-aware slot filling with narrow flexes
//!   before FLEX and SUPER_FLEX, and a startable-QB rule for superflex
//! - **Rank Feeds**: Season consensus and weekly (1QB / superflex) rankings with
//!   nickname and suffix aliasing
//! - **Position Grades**: 1-10 grades per position plus depth, and league-wide
//!   standings computed in parallel
//! - **Market Verdicts**: Buy/sell/hold targets for a contending or rebuilding team
//! - **Sleeper Integration**: League, roster and player catalog loading with a
//!   local file cache
//!
//! ## Quick Start
//!
//! ```rust
//! use ffl_blueprint::{
//!     fill_lineup, Player, PlayerId, Position, RankEntry, RankList, RosterSettings, RosterSlot,
//! };
//! use std::collections::HashMap;
//!
//! let allen = Player {
//!     id: PlayerId::new("4984"),
//!     first_name: "Josh".into(),
//!     last_name: "Allen".into(),
//!     position: Position::QB,
//!     fantasy_positions: [Position::QB].into_iter().collect(),
//!     team: Some("BUF".into()),
//! };
//! let catalog: HashMap<PlayerId, Player> = [(allen.id.clone(), allen)].into_iter().collect();
//! let ranks = RankList::new(vec![RankEntry::new("Josh Allen", Some(Position::QB))]);
//! let settings = RosterSettings::new().with(RosterSlot::SuperFlex, 1);
//!
//! let result = fill_lineup(&[PlayerId::new("4984")], &settings, &ranks, &catalog);
//! assert_eq!(result.lineup.len(), 1);
//! assert!(result.bench.is_empty());
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export FFL_BLUEPRINT_LEAGUE_ID=1180244
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod grades;
pub mod lineup;
pub mod market;
pub mod rankings;
pub mod roster;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, RankMode, RosterId, RosterSlot, TeamOutlook};
pub use error::{BlueprintError, Result};
pub use grades::{Archetype, GradeContext, PositionGrades};
pub use lineup::{fill_lineup, Bench, Lineup, LineupEntry, LineupResult};
pub use rankings::{Rank, RankEntry, RankList, RankSource, Rankings};
pub use roster::{Player, PlayerCatalog, PlayerLookup, RosterSettings};

pub const LEAGUE_ID_ENV_VAR: &str = "FFL_BLUEPRINT_LEAGUE_ID";
