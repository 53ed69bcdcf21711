//! Ranked player lists and their name index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::names::{alias_for, normalize_name};
use super::{Rank, RankSource};
use crate::cli::types::Position;

/// One row of a rank feed.
///
/// `position` is `None` for feeds that carry no position column and for
/// positions outside QB/RB/WR/TE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub name: String,
    pub position: Option<Position>,
}

impl RankEntry {
    pub fn new(name: impl Into<String>, position: Option<Position>) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Season consensus row as exported by the rankings service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeasonRankRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Position", default)]
    pub position: String,
}

/// Weekly row: one name per league format at the same rank.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeeklyRankRow {
    #[serde(rename = "1QB", default)]
    pub one_qb: Option<String>,
    #[serde(rename = "SF", default)]
    pub superflex: Option<String>,
}

/// An ordered rank list, best first, with an O(1) name index.
///
/// Ranks are 1-based positions in the list. When a name appears more than
/// once the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct RankList {
    entries: Vec<RankEntry>,
    index: HashMap<String, usize>,
    positional: Vec<Option<u32>>,
}

impl RankList {
    pub fn new(entries: Vec<RankEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        let mut seen_at_position: HashMap<Position, u32> = HashMap::new();
        let mut positional = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            index.entry(normalize_name(&entry.name)).or_insert(i);
            positional.push(entry.position.map(|p| {
                let n = seen_at_position.entry(p).or_insert(0);
                *n += 1;
                *n
            }));
        }

        Self {
            entries,
            index,
            positional,
        }
    }

    pub fn from_season_rows(rows: Vec<SeasonRankRow>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| RankEntry {
                    position: row.position.parse().ok(),
                    name: row.player,
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Locate a name: the name itself first, its alias second.
    fn find(&self, name: &str) -> Option<usize> {
        let normalized = normalize_name(name);
        self.index
            .get(&normalized)
            .or_else(|| alias_for(&normalized).and_then(|alias| self.index.get(alias)))
            .copied()
    }

    pub fn entry_for(&self, name: &str) -> Option<&RankEntry> {
        self.find(name).map(|i| &self.entries[i])
    }

    /// Entries at one position, best first.
    pub fn at_position(&self, position: Position) -> impl Iterator<Item = (Rank, &RankEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.position == Some(position))
            .map(|(i, e)| (Rank::Ranked(i as u32 + 1), e))
    }
}

impl RankSource for RankList {
    fn rank(&self, name: &str) -> Rank {
        match self.find(name) {
            Some(i) => Rank::Ranked(i as u32 + 1),
            None => Rank::Unranked,
        }
    }

    fn positional_rank(&self, name: &str) -> Rank {
        self.find(name)
            .and_then(|i| self.positional[i])
            .map(Rank::Ranked)
            .unwrap_or(Rank::Unranked)
    }
}

/// The two weekly lists, one per league format.
#[derive(Debug, Clone, Default)]
pub struct WeeklyRankings {
    pub one_qb: RankList,
    pub superflex: RankList,
}

impl WeeklyRankings {
    pub fn from_rows(rows: &[WeeklyRankRow]) -> Self {
        Self {
            one_qb: Self::column(rows.iter().map(|r| r.one_qb.as_deref())),
            superflex: Self::column(rows.iter().map(|r| r.superflex.as_deref())),
        }
    }

    fn column<'a>(names: impl Iterator<Item = Option<&'a str>>) -> RankList {
        RankList::new(
            names
                .flatten()
                .filter(|name| !name.trim().is_empty())
                .map(|name| RankEntry::new(name, None))
                .collect(),
        )
    }

    pub fn for_format(&self, is_superflex: bool) -> &RankList {
        if is_superflex {
            &self.superflex
        } else {
            &self.one_qb
        }
    }
}
