//! Mode switches supplied by the caller: which rankings to use and which
//! team outlook to read market verdicts for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rank feed orders players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Season-long market consensus rankings
    #[default]
    Season,
    /// Weekly rankings, split into 1QB and superflex lists
    Weekly,
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankMode::Season => "season",
            RankMode::Weekly => "weekly",
        };
        write!(f, "{}", s)
    }
}

/// The team direction a market verdict is read for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TeamOutlook {
    /// Team is trying to win now
    #[default]
    Contend,
    /// Team is building for future seasons
    Rebuild,
}

impl fmt::Display for TeamOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamOutlook::Contend => "contend",
            TeamOutlook::Rebuild => "rebuild",
        };
        write!(f, "{}", s)
    }
}
