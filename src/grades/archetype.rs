//! Roster archetypes derived from position grades.

use std::fmt;

use serde::Serialize;

use super::PositionGrades;

/// Broad roster build, from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Archetype {
    EliteValue,
    WellRounded,
    DualEliteQb,
    EliteQbTe,
    WrFactory,
    RbHeavy,
    OneYearReload,
    FutureValue,
    HardRebuild,
}

/// Suggested direction for one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum YearOutlook {
    Contend,
    Reload,
    Rebuild,
}

impl fmt::Display for YearOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            YearOutlook::Contend => "CONTEND",
            YearOutlook::Reload => "RELOAD",
            YearOutlook::Rebuild => "REBUILD",
        };
        write!(f, "{}", s)
    }
}

impl Archetype {
    /// Classify a grade card. Superflex and one-QB leagues check the
    /// QB-heavy builds in a different order.
    pub fn classify(grades: &PositionGrades, is_superflex: bool) -> Self {
        let (qb, rb, wr, te) = (grades.qb, grades.rb, grades.wr, grades.te);
        let total = grades.position_total();

        if qb >= 8 && rb >= 8 && wr >= 8 && te >= 8 {
            return Archetype::EliteValue;
        }
        if total >= 26 && qb >= 6 && rb >= 6 && wr >= 6 && te >= 6 {
            return Archetype::WellRounded;
        }

        if is_superflex {
            if total >= 20 && qb >= 8 {
                return Archetype::DualEliteQb;
            }
            if total >= 20 && wr >= 8 {
                return Archetype::WrFactory;
            }
        } else {
            if total >= 20 && wr >= 8 {
                return Archetype::WrFactory;
            }
            if total >= 20 && qb >= 8 && te >= 8 {
                return Archetype::EliteQbTe;
            }
        }

        if total >= 20 && rb >= 9 {
            return Archetype::RbHeavy;
        }
        if total >= 15 && qb >= 4 && rb < 9 && (3..8).contains(&wr) && te >= 3 {
            return Archetype::OneYearReload;
        }
        if total >= 15 {
            return Archetype::FutureValue;
        }
        Archetype::HardRebuild
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::EliteValue => "ELITE VALUE",
            Archetype::WellRounded => "WELL ROUNDED",
            Archetype::DualEliteQb => "DUAL ELITE QB",
            Archetype::EliteQbTe => "ELITE QB/TE",
            Archetype::WrFactory => "WR FACTORY",
            Archetype::RbHeavy => "RB HEAVY",
            Archetype::OneYearReload => "ONE YEAR RELOAD",
            Archetype::FutureValue => "FUTURE VALUE",
            Archetype::HardRebuild => "HARD REBUILD",
        }
    }

    /// Default three-season plan for the build.
    pub fn outlook(&self) -> [YearOutlook; 3] {
        use YearOutlook::*;
        match self {
            Archetype::HardRebuild => [Rebuild, Rebuild, Contend],
            Archetype::FutureValue => [Rebuild, Contend, Contend],
            Archetype::WellRounded | Archetype::RbHeavy => [Contend, Contend, Rebuild],
            Archetype::OneYearReload => [Reload, Contend, Contend],
            Archetype::EliteValue
            | Archetype::WrFactory
            | Archetype::DualEliteQb
            | Archetype::EliteQbTe => [Contend, Contend, Reload],
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
