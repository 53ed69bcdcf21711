//! Grades command implementation

use serde::Serialize;

use crate::{
    cli::CommonArgs,
    grades::{grade_league, Archetype, PositionGrades, Standing, YearOutlook},
    lineup::fill_lineup,
    Result,
};

use super::common::{load_session, Session};

/// Grades output for printing and JSON serialization.
#[derive(Debug, Clone, Serialize)]
pub struct GradesReport {
    pub grades: PositionGrades,
    pub archetype: Archetype,
    pub outlook: [YearOutlook; 3],
    /// Only present when a whole league was graded.
    pub standing: Option<Standing>,
    pub league_size: usize,
}

/// Grade the session roster; in league mode also rank it against the league.
///
/// Grades always read the season list, whatever feed the lineup uses.
pub fn build_grades(session: &Session) -> Result<GradesReport> {
    let ranks = session.rankings.season();

    let (grades, standing) = match &session.league {
        Some(league) => {
            let teams: Vec<_> = league.rosters.iter().map(|r| r.to_team()).collect();
            let graded = grade_league(&teams, &session.settings, ranks, &session.catalog);
            (
                *graded.grades_for(league.roster_id)?,
                Some(graded.standing(league.roster_id)?),
            )
        }
        None => {
            let result = fill_lineup(&session.roster, &session.settings, ranks, &session.catalog);
            (
                PositionGrades::from_lineup(&result, ranks, session.grade_context()),
                None,
            )
        }
    };

    let archetype = Archetype::classify(&grades, session.is_superflex());
    Ok(GradesReport {
        grades,
        archetype,
        outlook: archetype.outlook(),
        standing,
        league_size: session.league_size,
    })
}

/// Handle the grades command
pub async fn handle_grades(common: CommonArgs) -> Result<()> {
    let session = load_session(&common).await?;
    let report = build_grades(&session)?;

    if common.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let g = &report.grades;
    let rows = [
        ("QB", g.qb, report.standing.map(|s| s.qb)),
        ("RB", g.rb, report.standing.map(|s| s.rb)),
        ("WR", g.wr, report.standing.map(|s| s.wr)),
        ("TE", g.te, report.standing.map(|s| s.te)),
        ("DEPTH", g.depth, report.standing.map(|s| s.depth)),
        ("OVERALL", g.overall, report.standing.map(|s| s.overall)),
    ];
    for (label, grade, place) in rows {
        match place {
            Some(place) => println!("{:<8} {:>2}/10  ({} of {})", label, grade, place, report.league_size),
            None => println!("{:<8} {:>2}/10", label, grade),
        }
    }
    println!(
        "Archetype: {} ({} / {} / {})",
        report.archetype, report.outlook[0], report.outlook[1], report.outlook[2]
    );

    Ok(())
}
