//! Market command implementation

use std::path::Path;

use serde::Serialize;

use crate::{
    cli::{types::TeamOutlook, CommonArgs},
    market::{MarketBoard, MarketVerdict, Verdict},
    roster::PlayerLookup,
    Position, Result,
};

use super::common::{load_session, read_json, Session};

/// Verdict for one rostered player; `verdict` is `None` when the sheet has no row.
#[derive(Debug, Clone, Serialize)]
pub struct RosterVerdict {
    pub player: String,
    pub position: Position,
    pub verdict: Option<Verdict>,
}

/// Market output for printing and JSON serialization.
#[derive(Debug, Clone, Serialize)]
pub struct MarketReport {
    pub outlook: TeamOutlook,
    pub board: MarketBoard,
    pub roster: Vec<RosterVerdict>,
}

pub fn load_market(path: &Path) -> Result<Vec<MarketVerdict>> {
    read_json(path)
}

/// Split the market for `outlook` and look up a verdict for each rostered player.
pub fn build_market(session: &Session, verdicts: Vec<MarketVerdict>, outlook: TeamOutlook) -> MarketReport {
    let board = MarketBoard::build(verdicts, outlook, session.rankings.season());

    let roster = session
        .roster
        .iter()
        .filter_map(|id| session.catalog.player(id))
        .map(|player| RosterVerdict {
            player: player.full_name(),
            position: player.position,
            verdict: board
                .verdict_for(&player.full_name())
                .map(|v| v.for_outlook(outlook)),
        })
        .collect();

    MarketReport {
        outlook,
        board,
        roster,
    }
}

fn print_names(label: &str, verdicts: &[MarketVerdict]) {
    let names: Vec<&str> = verdicts.iter().map(|v| v.name.as_str()).collect();
    println!("{:<10} {}", label, names.join(", "));
}

/// Handle the market command
pub async fn handle_market(common: CommonArgs, market: &Path, outlook: TeamOutlook) -> Result<()> {
    let session = load_session(&common).await?;
    let report = build_market(&session, load_market(market)?, outlook);

    if common.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Market ({})", report.outlook);
    for position in Position::ALL {
        print_names(&format!("{} buys", position), report.board.buys_at(position));
    }
    print_names("Sells", &report.board.sells);
    print_names("Holds", &report.board.holds);

    println!();
    for row in &report.roster {
        let verdict = row
            .verdict
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<28} {:<3} {}", row.player, row.position, verdict);
    }

    Ok(())
}
