//! Rank feeds: lookups by player name and the comparator derived from them.
//!
//! Two interchangeable feeds exist:
//! - **season**: one flat market-consensus list with positions
//! - **weekly**: separate 1QB and superflex lists without positions
//!
//! The caller picks one with [`Rankings::select`]; nothing here remembers a
//! mode between calls.

pub mod list;
pub mod names;

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::cli::types::RankMode;
use crate::error::{BlueprintError, Result};
use crate::roster::Player;

pub use list::{RankEntry, RankList, SeasonRankRow, WeeklyRankRow, WeeklyRankings};
pub use names::{alias_for, names_match, normalize_name};

/// A player's rank, 1-based. Unranked players sort after every ranked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ranked(u32),
    Unranked,
}

impl Rank {
    pub fn value(&self) -> Option<u32> {
        match self {
            Rank::Ranked(r) => Some(*r),
            Rank::Unranked => None,
        }
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, Rank::Ranked(_))
    }

    /// Strictly better (numerically lower) than `threshold`.
    pub fn is_better_than(&self, threshold: u32) -> bool {
        matches!(self, Rank::Ranked(r) if *r < threshold)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ranked(r) => write!(f, "{}", r),
            Rank::Unranked => write!(f, "NR"),
        }
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// A ranking function over player full names.
pub trait RankSource {
    /// Overall rank, or [`Rank::Unranked`] if the name is not in the feed.
    fn rank(&self, name: &str) -> Rank;

    /// Rank among players sharing this player's position.
    fn positional_rank(&self, name: &str) -> Rank;

    fn compare_names(&self, a: &str, b: &str) -> Ordering {
        self.rank(a).cmp(&self.rank(b))
    }

    fn player_rank(&self, player: &Player) -> Rank {
        self.rank(&player.full_name())
    }

    fn compare_players(&self, a: &Player, b: &Player) -> Ordering {
        self.player_rank(a).cmp(&self.player_rank(b))
    }
}

/// All loaded rank feeds.
#[derive(Debug, Clone, Default)]
pub struct Rankings {
    season: RankList,
    weekly: Option<WeeklyRankings>,
}

impl Rankings {
    pub fn new(season: RankList, weekly: Option<WeeklyRankings>) -> Self {
        Self { season, weekly }
    }

    /// The season consensus list; grades and market ordering always use it.
    pub fn season(&self) -> &RankList {
        &self.season
    }

    pub fn weekly(&self) -> Option<&WeeklyRankings> {
        self.weekly.as_ref()
    }

    /// Feed for a mode. Weekly mode reads the list matching the league format.
    pub fn select(&self, mode: RankMode, is_superflex: bool) -> Result<&RankList> {
        match mode {
            RankMode::Season => Ok(&self.season),
            RankMode::Weekly => self
                .weekly
                .as_ref()
                .map(|w| w.for_format(is_superflex))
                .ok_or_else(|| BlueprintError::MissingRankings {
                    kind: RankMode::Weekly.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{PlayerId, Position};

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Ranked(1) < Rank::Ranked(2));
        assert!(Rank::Ranked(5000) < Rank::Unranked);
        assert_eq!(Rank::Unranked.cmp(&Rank::Unranked), Ordering::Equal);
    }

    #[test]
    fn test_threshold() {
        assert!(Rank::Ranked(159).is_better_than(160));
        assert!(!Rank::Ranked(160).is_better_than(160));
        assert!(!Rank::Unranked.is_better_than(160));
    }

    #[test]
    fn test_rank_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Rank::Ranked(12)).unwrap(), "12");
        assert_eq!(serde_json::to_string(&Rank::Unranked).unwrap(), "null");
        assert_eq!(Rank::Unranked.to_string(), "NR");
    }

    #[test]
    fn test_compare_players_by_full_name() {
        let list = RankList::new(vec![
            RankEntry::new("Josh Allen", Some(Position::QB)),
            RankEntry::new("Cameron Ward", Some(Position::QB)),
        ]);
        let player = |id: &str, first: &str, last: &str| Player {
            id: PlayerId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            position: Position::QB,
            fantasy_positions: [Position::QB].into_iter().collect(),
            team: None,
        };
        let allen = player("4984", "Josh", "Allen");
        let ward = player("12522", "Cam", "Ward");
        let unknown = player("1", "Nobody", "Special");

        assert_eq!(list.compare_players(&allen, &ward), Ordering::Less);
        assert_eq!(list.compare_players(&unknown, &ward), Ordering::Greater);
        assert_eq!(list.compare_names("Cam Ward", "Cameron Ward"), Ordering::Equal);
    }

    #[test]
    fn test_select_by_mode() {
        let season = RankList::new(vec![RankEntry::new("Josh Allen", Some(Position::QB))]);
        let rankings = Rankings::new(season, None);

        assert_eq!(
            rankings
                .select(RankMode::Season, true)
                .unwrap()
                .rank("Josh Allen"),
            Rank::Ranked(1)
        );
        assert!(matches!(
            rankings.select(RankMode::Weekly, false),
            Err(BlueprintError::MissingRankings { .. })
        ));

        let weekly = WeeklyRankings {
            one_qb: RankList::new(vec![
                RankEntry::new("Bijan Robinson", None),
                RankEntry::new("Josh Allen", None),
            ]),
            superflex: RankList::new(vec![RankEntry::new("Josh Allen", None)]),
        };
        let rankings = Rankings::new(RankList::default(), Some(weekly));
        assert_eq!(
            rankings
                .select(RankMode::Weekly, false)
                .unwrap()
                .rank("Josh Allen"),
            Rank::Ranked(2)
        );
        assert_eq!(
            rankings
                .select(RankMode::Weekly, true)
                .unwrap()
                .rank("Josh Allen"),
            Rank::Ranked(1)
        );
    }
}
