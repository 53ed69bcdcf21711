//! Roster strength grades.
//!
//! Every rostered player is mapped through a decreasing value curve over
//! their season rank. Per-position sums are compared against the league's
//! fair share at that position and scaled to a 1-10 grade; depth uses the
//! same curve over non-starters only.

pub mod archetype;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::cli::types::{PlayerId, Position, RosterId};
use crate::error::{BlueprintError, Result};
use crate::lineup::{fill_lineup, LineupResult};
use crate::rankings::{names_match, Rank, RankList, RankSource};
use crate::roster::{Player, PlayerLookup, RosterSettings};

pub use archetype::{Archetype, YearOutlook};


pub const VALUE_SCALE: f64 = 1.0808218554;
pub const VALUE_DECAY: f64 = 0.97230651306;

pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 10;

/// A roster holding exactly its fair share of a position grades out here.
const FAIR_SHARE_GRADE: f64 = 5.0;
/// Raw depth value per grade point.
const DEPTH_POINTS_PER_GRADE: f64 = 10.0;

/// Quarterbacks worth an extra QB grade point in one-QB leagues.
pub const ELITE_ONE_QB_QBS: &[&str] = &["Josh Allen", "Jayden Daniels", "Jalen Hurts", "Lamar Jackson"];

/// `1.0808218554 * 0.97230651306^rank * 100`; unranked players are worth 0.
pub fn player_value(rank: Rank) -> f64 {
    match rank {
        Rank::Ranked(r) => VALUE_SCALE * VALUE_DECAY.powf(f64::from(r)) * 100.0,
        Rank::Unranked => 0.0,
    }
}

fn clamp_grade(score: f64) -> u8 {
    if !score.is_finite() {
        return MIN_GRADE;
    }
    score.round().clamp(f64::from(MIN_GRADE), f64::from(MAX_GRADE)) as u8
}

/// League format needed to put a raw position value on the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeContext {
    pub is_superflex: bool,
    pub league_size: usize,
}

impl GradeContext {
    pub fn new(is_superflex: bool, league_size: usize) -> Self {
        Self {
            is_superflex,
            league_size,
        }
    }
}

/// Summed value of the players eligible at `position`.
pub fn position_value<R: RankSource + ?Sized>(position: Position, players: &[&Player], ranks: &R) -> f64 {
    players
        .iter()
        .filter(|p| p.is_eligible_at(position))
        .map(|p| player_value(ranks.player_rank(p)))
        .sum()
}

/// What one team would hold if every ranked player at the position were
/// spread evenly across the league.
fn fair_share(position: Position, ranks: &RankList, league_size: usize) -> f64 {
    let pool: f64 = ranks
        .at_position(position)
        .map(|(rank, _)| player_value(rank))
        .sum();
    pool / league_size.max(1) as f64
}

fn elite_qb_bonus(players: &[&Player]) -> usize {
    players
        .iter()
        .filter(|p| p.position == Position::QB)
        .filter(|p| {
            let name = p.full_name();
            ELITE_ONE_QB_QBS.iter().any(|elite| names_match(&name, elite))
        })
        .count()
}

/// 1-10 grade for one position.
pub fn grade_by_position(position: Position, ranks: &RankList, ctx: GradeContext, players: &[&Player]) -> u8 {
    let share = fair_share(position, ranks, ctx.league_size);
    if share <= 0.0 {
        return MIN_GRADE;
    }

    let mut score = FAIR_SHARE_GRADE * position_value(position, players, ranks) / share;
    if position == Position::QB && !ctx.is_superflex {
        score += elite_qb_bonus(players) as f64;
    }
    clamp_grade(score)
}

/// Grade for a position given by name, as it arrives from a caller.
pub fn grade_for(position: &str, ranks: &RankList, ctx: GradeContext, players: &[&Player]) -> Result<u8> {
    let position: Position = position.parse()?;
    Ok(grade_by_position(position, ranks, ctx, players))
}

/// Summed value of non-starters, regardless of position.
pub fn depth_value<R: RankSource + ?Sized>(non_starters: &[&Player], ranks: &R) -> f64 {
    non_starters.iter().map(|p| player_value(ranks.player_rank(p))).sum()
}

pub fn depth_score<R: RankSource + ?Sized>(non_starters: &[&Player], ranks: &R) -> u8 {
    clamp_grade(depth_value(non_starters, ranks) / DEPTH_POINTS_PER_GRADE)
}

/// One roster's grade card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PositionGrades {
    pub qb: u8,
    pub rb: u8,
    pub wr: u8,
    pub te: u8,
    pub depth: u8,
    pub overall: u8,
}

impl PositionGrades {
    /// Grade a filled lineup. The roster is everyone in the lineup plus the bench.
    pub fn from_lineup(result: &LineupResult, ranks: &RankList, ctx: GradeContext) -> Self {
        let roster: Vec<&Player> = result
            .lineup
            .iter()
            .filter_map(|e| e.player.as_ref())
            .chain(result.bench.players().iter())
            .collect();
        let grade = |position| grade_by_position(position, ranks, ctx, &roster);

        let mut grades = PositionGrades {
            qb: grade(Position::QB),
            rb: grade(Position::RB),
            wr: grade(Position::WR),
            te: grade(Position::TE),
            depth: depth_score(&result.non_starters(), ranks),
            overall: 0,
        };
        grades.overall = grades.compute_overall();
        grades
    }

    fn compute_overall(&self) -> u8 {
        let sum = [self.qb, self.rb, self.wr, self.te, self.depth]
            .iter()
            .map(|g| f64::from(*g))
            .sum::<f64>();
        clamp_grade(sum / 5.0)
    }

    pub fn get(&self, position: Position) -> u8 {
        match position {
            Position::QB => self.qb,
            Position::RB => self.rb,
            Position::WR => self.wr,
            Position::TE => self.te,
        }
    }

    /// Sum of the four position grades.
    pub fn position_total(&self) -> u32 {
        Position::ALL.iter().map(|p| u32::from(self.get(*p))).sum()
    }
}

/// A league roster to grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoster {
    pub roster_id: RosterId,
    pub player_ids: Vec<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamGrades {
    pub roster_id: RosterId,
    pub grades: PositionGrades,
}

/// 1-based standing of one team per category; ties share the best rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
    pub depth: usize,
    pub overall: usize,
}

/// Grades for every roster in a league.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LeagueGrades {
    teams: Vec<TeamGrades>,
}

impl LeagueGrades {
    pub fn teams(&self) -> &[TeamGrades] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn grades_for(&self, roster_id: RosterId) -> Result<&PositionGrades> {
        self.teams
            .iter()
            .find(|t| t.roster_id == roster_id)
            .map(|t| &t.grades)
            .ok_or(BlueprintError::RosterNotFound {
                roster_id: roster_id.as_u32(),
            })
    }

    pub fn standing(&self, roster_id: RosterId) -> Result<Standing> {
        let target = *self.grades_for(roster_id)?;
        let place = |pick: fn(&PositionGrades) -> u8| {
            let mine = pick(&target);
            1 + self.teams.iter().filter(|t| pick(&t.grades) > mine).count()
        };

        Ok(Standing {
            qb: place(|g| g.qb),
            rb: place(|g| g.rb),
            wr: place(|g| g.wr),
            te: place(|g| g.te),
            depth: place(|g| g.depth),
            overall: place(|g| g.overall),
        })
    }
}

/// Fill and grade every roster in parallel against the season list.
pub fn grade_league<L>(
    rosters: &[TeamRoster],
    settings: &RosterSettings,
    ranks: &RankList,
    lookup: &L,
) -> LeagueGrades
where
    L: PlayerLookup + Sync + ?Sized,
{
    let ctx = GradeContext::new(settings.is_superflex(), rosters.len());
    let teams: Vec<TeamGrades> = rosters
        .par_iter()
        .map(|team| {
            let result = fill_lineup(&team.player_ids, settings, ranks, lookup);
            TeamGrades {
                roster_id: team.roster_id,
                grades: PositionGrades::from_lineup(&result, ranks, ctx),
            }
        })
        .collect();

    debug!(teams = teams.len(), superflex = ctx.is_superflex, "graded league");
    LeagueGrades { teams }
}
