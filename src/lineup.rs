//! Projected starting lineups.
//!
//! [`fill_lineup`] assigns a roster's players to the league's slots in fill
//! order (fixed starters, narrow flexes, FLEX, SUPER_FLEX, then BENCH), best
//! ranked first, and derives the bench from whoever is left. Every call is a
//! pure function of its inputs.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::cli::types::{PlayerId, Position, RosterSlot};
use crate::rankings::{Rank, RankSource};
use crate::roster::{Player, PlayerLookup, RosterSettings};


/// Quarterbacks ranked better than this jump ahead of every non-quarterback
/// for SUPER_FLEX; quarterbacks at or past it fall behind them.
pub const STARTABLE_QB_THRESHOLD: u32 = 160;

/// One slot instance. `player` is `None` when no eligible player was left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupEntry {
    pub player: Option<Player>,
    pub slot: RosterSlot,
}

impl LineupEntry {
    pub fn is_placeholder(&self) -> bool {
        self.player.is_none()
    }

    pub fn player_id(&self) -> Option<&PlayerId> {
        self.player.as_ref().map(|p| &p.id)
    }
}

/// Ordered slot assignments, one entry per required slot instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lineup {
    entries: Vec<LineupEntry>,
}

impl Lineup {
    pub fn entries(&self) -> &[LineupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineupEntry> {
        self.entries.iter()
    }

    /// Players in starting (non-BENCH) slots.
    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.entries
            .iter()
            .filter(|e| e.slot != RosterSlot::Bench)
            .filter_map(|e| e.player.as_ref())
    }

    /// Players placed in BENCH slots.
    pub fn reserves(&self) -> impl Iterator<Item = &Player> {
        self.entries
            .iter()
            .filter(|e| e.slot == RosterSlot::Bench)
            .filter_map(|e| e.player.as_ref())
    }

    /// Slot instances nobody could fill.
    pub fn unfilled(&self) -> impl Iterator<Item = RosterSlot> + '_ {
        self.entries
            .iter()
            .filter(|e| e.is_placeholder())
            .map(|e| e.slot)
    }

    pub fn assigned_ids(&self) -> HashSet<&PlayerId> {
        self.entries.iter().filter_map(|e| e.player_id()).collect()
    }
}

/// Rostered players left out of the lineup, sorted by position then last name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bench {
    players: Vec<Player>,
}

impl Bench {
    fn new(mut players: Vec<Player>) -> Self {
        players.sort_by(compare_for_display);
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// `"J. ALLEN (QB), B. ROBINSON (RB)"`.
    pub fn summary(&self) -> String {
        self.players
            .iter()
            .map(Player::short_label)
            .collect::<Vec<_>>()
            .join(", ")
            .to_uppercase()
    }
}

fn compare_for_display(a: &Player, b: &Player) -> Ordering {
    a.position
        .as_str()
        .cmp(b.position.as_str())
        .then_with(|| a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()))
}

/// Output of one lineup computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineupResult {
    pub lineup: Lineup,
    pub bench: Bench,
}

impl LineupResult {
    /// Everyone not starting: BENCH-slot players followed by the bench.
    pub fn non_starters(&self) -> Vec<&Player> {
        self.lineup
            .reserves()
            .chain(self.bench.players().iter())
            .collect()
    }
}

/// A roster player with its rank resolved once up front.
struct Candidate<'a> {
    player: &'a Player,
    rank: Rank,
}

impl Candidate<'_> {
    /// SUPER_FLEX grouping: startable QBs, then non-QBs, then the other QBs.
    fn superflex_tier(&self) -> u8 {
        match self.player.position {
            Position::QB if self.rank.is_better_than(STARTABLE_QB_THRESHOLD) => 0,
            Position::QB => 2,
            _ => 1,
        }
    }
}

/// Assign a roster to slots.
///
/// Unknown ids are skipped and repeated ids count once. The lineup always
/// holds exactly `settings.total_slots()` entries; slots without an eligible
/// player get a placeholder.
pub fn fill_lineup<L, R>(
    player_ids: &[PlayerId],
    settings: &RosterSettings,
    ranks: &R,
    lookup: &L,
) -> LineupResult
where
    L: PlayerLookup + ?Sized,
    R: RankSource + ?Sized,
{
    let mut seen = HashSet::new();
    let roster: Vec<Candidate> = player_ids
        .iter()
        .filter(|id| seen.insert(*id))
        .filter_map(|id| lookup.player(id))
        .map(|player| Candidate {
            player,
            rank: ranks.player_rank(player),
        })
        .collect();

    let mut taken = vec![false; roster.len()];
    let mut entries = Vec::with_capacity(settings.total_slots());

    for (slot, count) in settings.fill_order() {
        let picks = best_at_slot(slot, count as usize, &roster, &taken);
        debug!(
            slot = %slot,
            required = count,
            filled = picks.len(),
            "filled lineup slot"
        );

        for i in 0..count as usize {
            let player = picks.get(i).map(|&idx| {
                taken[idx] = true;
                roster[idx].player.clone()
            });
            entries.push(LineupEntry { player, slot });
        }
    }

    let bench = roster
        .iter()
        .zip(&taken)
        .filter(|(_, taken)| !**taken)
        .map(|(c, _)| c.player.clone())
        .collect();

    LineupResult {
        lineup: Lineup { entries },
        bench: Bench::new(bench),
    }
}

/// Indices of the best `count` untaken players eligible for `slot`.
fn best_at_slot(slot: RosterSlot, count: usize, roster: &[Candidate], taken: &[bool]) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..roster.len())
        .filter(|&i| !taken[i] && roster[i].player.is_eligible_for(slot))
        .collect();

    // stable sorts: equal ranks keep roster order
    if slot == RosterSlot::SuperFlex {
        pool.sort_by_key(|&i| (roster[i].superflex_tier(), roster[i].rank));
    } else {
        pool.sort_by_key(|&i| roster[i].rank);
    }

    pool.truncate(count);
    pool
}
