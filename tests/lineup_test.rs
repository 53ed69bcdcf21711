//! Integration tests for lineup projection through the public API

use std::collections::{HashMap, HashSet};

use ffl_blueprint::{
    fill_lineup, Player, PlayerId, Position, RankEntry, RankList, RankSource, Rankings,
    RankMode, RosterSettings, RosterSlot,
};

fn player(id: &str, first: &str, last: &str, positions: &[Position]) -> Player {
    Player {
        id: PlayerId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: positions[0],
        fantasy_positions: positions.iter().copied().collect(),
        team: None,
    }
}

fn catalog(players: Vec<Player>) -> HashMap<PlayerId, Player> {
    players.into_iter().map(|p| (p.id.clone(), p)).collect()
}

fn ids(raw: &[&str]) -> Vec<PlayerId> {
    raw.iter().map(|s| PlayerId::new(*s)).collect()
}

#[test]
fn test_flex_scenario() {
    // QB r5, RB r3, RB r40, WR r10
    let mut entries: Vec<RankEntry> = (1..=40).map(|r| RankEntry::new(format!("Other Guy{r}"), None)).collect();
    entries[4] = RankEntry::new("Jalen Hurts", Some(Position::QB));
    entries[2] = RankEntry::new("Saquon Barkley", Some(Position::RB));
    entries[39] = RankEntry::new("Rhamondre Stevenson", Some(Position::RB));
    entries[9] = RankEntry::new("Malik Nabers", Some(Position::WR));
    let ranks = RankList::new(entries);

    let catalog = catalog(vec![
        player("qb", "Jalen", "Hurts", &[Position::QB]),
        player("rb1", "Saquon", "Barkley", &[Position::RB]),
        player("rb2", "Rhamondre", "Stevenson", &[Position::RB]),
        player("wr", "Malik", "Nabers", &[Position::WR]),
    ]);
    let settings: RosterSettings = "QB=1,RB=1,FLEX=1,BENCH=1".parse().unwrap();

    let result = fill_lineup(&ids(&["qb", "rb1", "rb2", "wr"]), &settings, &ranks, &catalog);

    let got: Vec<(&str, RosterSlot)> = result
        .lineup
        .iter()
        .map(|e| (e.player_id().map(PlayerId::as_str).unwrap_or("-"), e.slot))
        .collect();
    assert_eq!(
        got,
        vec![
            ("qb", RosterSlot::QB),
            ("rb1", RosterSlot::RB),
            ("wr", RosterSlot::Flex),
            ("rb2", RosterSlot::Bench),
        ]
    );
    assert!(result.bench.is_empty());
    assert_eq!(result.bench.summary(), "");
}

#[test]
fn test_sleeper_settings_drive_the_fill() {
    let ranks = RankList::new(vec![
        RankEntry::new("Travis Hunter", Some(Position::WR)),
        RankEntry::new("Trey McBride", Some(Position::TE)),
        RankEntry::new("Kyren Williams", Some(Position::RB)),
        RankEntry::new("Baker Mayfield", Some(Position::QB)),
    ]);
    let catalog = catalog(vec![
        player("hunter", "Travis", "Hunter", &[Position::WR, Position::RB]),
        player("mcbride", "Trey", "McBride", &[Position::TE]),
        player("williams", "Kyren", "Williams", &[Position::RB]),
        player("mayfield", "Baker", "Mayfield", &[Position::QB]),
    ]);
    let positions = ["SUPER_FLEX", "FLEX", "REC_FLEX", "WRRB_FLEX", "K", "BN"];
    let settings = RosterSettings::from_roster_positions(&positions);

    let result = fill_lineup(
        &ids(&["mayfield", "williams", "mcbride", "hunter"]),
        &settings,
        &ranks,
        &catalog,
    );

    let got: Vec<(RosterSlot, &str)> = result
        .lineup
        .iter()
        .map(|e| (e.slot, e.player_id().map(PlayerId::as_str).unwrap_or("-")))
        .collect();
    assert_eq!(
        got,
        vec![
            (RosterSlot::WrRbFlex, "hunter"),
            (RosterSlot::WrTeFlex, "mcbride"),
            (RosterSlot::Flex, "williams"),
            (RosterSlot::SuperFlex, "mayfield"),
            (RosterSlot::Bench, "-"),
        ]
    );
    assert_eq!(result.lineup.unfilled().collect::<Vec<_>>(), vec![RosterSlot::Bench]);
}

#[test]
fn test_rank_mode_changes_lineup() {
    let season = RankList::new(vec![
        RankEntry::new("Kenneth Walker III", Some(Position::RB)),
        RankEntry::new("James Cook", Some(Position::RB)),
    ]);
    let weekly = ffl_blueprint::rankings::WeeklyRankings {
        one_qb: RankList::new(vec![
            RankEntry::new("James Cook III", None),
            RankEntry::new("Kenneth Walker", None),
        ]),
        superflex: RankList::default(),
    };
    let rankings = Rankings::new(season, Some(weekly));
    let catalog = catalog(vec![
        player("walker", "Kenneth", "Walker", &[Position::RB]),
        player("cook", "James", "Cook", &[Position::RB]),
    ]);
    let settings = RosterSettings::new().with(RosterSlot::RB, 1);
    let roster = ids(&["walker", "cook"]);

    let season_pick = fill_lineup(
        &roster,
        &settings,
        rankings.select(RankMode::Season, false).unwrap(),
        &catalog,
    );
    let weekly_pick = fill_lineup(
        &roster,
        &settings,
        rankings.select(RankMode::Weekly, false).unwrap(),
        &catalog,
    );

    assert_eq!(season_pick.lineup.entries()[0].player_id(), Some(&PlayerId::new("walker")));
    assert_eq!(weekly_pick.lineup.entries()[0].player_id(), Some(&PlayerId::new("cook")));
}

#[test]
fn test_alias_round_trip() {
    let ranks = RankList::new(vec![
        RankEntry::new("Cameron Ward", Some(Position::QB)),
        RankEntry::new("Marquise Brown", Some(Position::WR)),
    ]);
    assert_eq!(ranks.rank("Cam Ward"), ranks.rank("Cameron Ward"));
    assert_eq!(ranks.rank("Hollywood Brown"), ranks.rank("Marquise Brown"));
    assert_eq!(ranks.positional_rank("Hollywood Brown").value(), Some(1));
}

#[test]
fn test_large_roster_properties() {
    let positions = [Position::QB, Position::RB, Position::WR, Position::TE];
    let players: Vec<Player> = (0..30)
        .map(|i| player(&format!("id{i}"), "Deep", &format!("Roster{i}"), &[positions[i % 4]]))
        .collect();
    let ranks = RankList::new(
        players
            .iter()
            .rev()
            .map(|p| RankEntry::new(p.full_name(), Some(p.position)))
            .collect(),
    );
    let roster: Vec<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
    let catalog = catalog(players);
    let settings = RosterSettings::standard();

    let result = fill_lineup(&roster, &settings, &ranks, &catalog);

    assert_eq!(result.lineup.len(), settings.total_slots());
    let assigned = result.lineup.assigned_ids();
    assert_eq!(assigned.len(), result.lineup.iter().filter(|e| !e.is_placeholder()).count());

    let bench: HashSet<&PlayerId> = result.bench.players().iter().map(|p| &p.id).collect();
    assert!(bench.is_disjoint(&assigned));
    assert_eq!(bench.len() + assigned.len(), roster.len());
    assert_eq!(result.non_starters().len(), result.bench.len() + 6);
}
