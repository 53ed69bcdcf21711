//! Lineup command implementation

use serde::Serialize;

use crate::{
    cli::{types::RankMode, CommonArgs},
    lineup::{fill_lineup, LineupResult},
    rankings::{Rank, RankSource},
    Result,
};

use super::common::{load_session, Session};

/// One printed lineup row.
#[derive(Debug, Clone, Serialize)]
pub struct LineupRow {
    pub slot: String,
    pub player: Option<String>,
    pub team: Option<String>,
    pub rank: Rank,
}

/// Lineup output for printing and JSON serialization.
#[derive(Debug, Clone, Serialize)]
pub struct LineupReport {
    pub mode: RankMode,
    pub superflex: bool,
    pub lineup: Vec<LineupRow>,
    pub bench: Vec<String>,
    pub bench_summary: String,
}

/// Fill the session roster's lineup with the feed chosen by `mode`.
pub fn build_lineup(session: &Session, mode: RankMode) -> Result<(LineupResult, LineupReport)> {
    let ranks = session.rankings.select(mode, session.is_superflex())?;
    let result = fill_lineup(&session.roster, &session.settings, ranks, &session.catalog);

    let lineup = result
        .lineup
        .iter()
        .map(|entry| LineupRow {
            slot: entry.slot.to_string(),
            player: entry.player.as_ref().map(|p| p.full_name()),
            team: entry.player.as_ref().and_then(|p| p.team.clone()),
            rank: entry
                .player
                .as_ref()
                .map(|p| ranks.player_rank(p))
                .unwrap_or(Rank::Unranked),
        })
        .collect();

    let report = LineupReport {
        mode,
        superflex: session.is_superflex(),
        lineup,
        bench: result.bench.players().iter().map(|p| p.full_name()).collect(),
        bench_summary: result.bench.summary(),
    };

    Ok((result, report))
}

/// Handle the lineup command
pub async fn handle_lineup(common: CommonArgs, mode: RankMode) -> Result<()> {
    let session = load_session(&common).await?;
    let (_, report) = build_lineup(&session, mode)?;

    if common.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Lineup ({} rankings, {})",
        report.mode,
        if report.superflex { "superflex" } else { "1QB" }
    );
    for row in &report.lineup {
        match &row.player {
            Some(name) => println!(
                "{:<12} {:<28} {:<4} #{}",
                row.slot,
                name,
                row.team.as_deref().unwrap_or("FA"),
                row.rank
            ),
            None => println!("{:<12} (empty)", row.slot),
        }
    }
    println!("Bench: {}", report.bench_summary);

    Ok(())
}
