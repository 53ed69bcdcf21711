//! Buy/sell/hold market verdicts.
//!
//! Verdict rows come from the market sheet export. A [`MarketBoard`] splits
//! them for one team outlook into per-position buys, sells and holds.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::types::{PlayerId, Position, TeamOutlook};
use crate::error::{BlueprintError, Result};
use crate::rankings::{names_match, RankSource};

/// Market call on a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Verdict {
    HardBuy,
    SoftBuy,
    Hold,
    SoftSell,
    HardSell,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::HardBuy => "HARD BUY",
            Verdict::SoftBuy => "SOFT BUY",
            Verdict::Hold => "HOLD",
            Verdict::SoftSell => "SOFT SELL",
            Verdict::HardSell => "HARD SELL",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, Verdict::HardBuy | Verdict::SoftBuy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, Verdict::HardSell | Verdict::SoftSell)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = BlueprintError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "HARD BUY" => Ok(Verdict::HardBuy),
            "SOFT BUY" => Ok(Verdict::SoftBuy),
            "HOLD" => Ok(Verdict::Hold),
            "SOFT SELL" => Ok(Verdict::SoftSell),
            "HARD SELL" => Ok(Verdict::HardSell),
            _ => Err(BlueprintError::InvalidVerdict {
                verdict: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Verdict {
    type Error = BlueprintError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Verdict> for String {
    fn from(value: Verdict) -> Self {
        value.as_str().to_string()
    }
}

/// One row of the buy/sell/hold export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketVerdict {
    #[serde(rename = "Player")]
    pub name: String,
    #[serde(rename = "Position")]
    pub position: Position,
    #[serde(rename = "Team", default)]
    pub team: Option<String>,
    #[serde(rename = "Age", default)]
    pub age: Option<f64>,
    #[serde(rename = "Market ADP")]
    pub market_adp: f64,
    #[serde(rename = "Domain Rank")]
    pub house_rank: f64,
    /// Market ADP minus house rank; positive means the market is late on the player.
    #[serde(rename = "Difference")]
    pub difference: f64,
    #[serde(rename = "Calculated Verdict")]
    pub verdict: Verdict,
    #[serde(rename = "Contend Team")]
    pub contend: Verdict,
    #[serde(rename = "Rebuild Team")]
    pub rebuild: Verdict,
    #[serde(rename = "PlayerSleeperId", default)]
    pub sleeper_id: Option<u64>,
}

impl MarketVerdict {
    pub fn for_outlook(&self, outlook: TeamOutlook) -> Verdict {
        match outlook {
            TeamOutlook::Contend => self.contend,
            TeamOutlook::Rebuild => self.rebuild,
        }
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        self.sleeper_id.map(|id| PlayerId::new(id.to_string()))
    }
}

/// Verdicts split for one outlook.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketBoard {
    pub buys: BTreeMap<Position, Vec<MarketVerdict>>,
    pub sells: Vec<MarketVerdict>,
    pub holds: Vec<MarketVerdict>,
    #[serde(skip)]
    all: Vec<MarketVerdict>,
}

impl MarketBoard {
    /// Buys and sells are ordered by rank, holds by difference (largest first).
    pub fn build<R: RankSource + ?Sized>(verdicts: Vec<MarketVerdict>, outlook: TeamOutlook, ranks: &R) -> Self {
        let by_rank = |list: &mut Vec<MarketVerdict>| list.sort_by_cached_key(|v| ranks.rank(&v.name));

        let mut buys: BTreeMap<Position, Vec<MarketVerdict>> = BTreeMap::new();
        for v in verdicts.iter().filter(|v| v.for_outlook(outlook).is_buy()) {
            buys.entry(v.position).or_default().push(v.clone());
        }
        for list in buys.values_mut() {
            by_rank(list);
        }

        let mut sells: Vec<MarketVerdict> = verdicts
            .iter()
            .filter(|v| v.for_outlook(outlook).is_sell())
            .cloned()
            .collect();
        by_rank(&mut sells);

        let mut holds: Vec<MarketVerdict> = verdicts
            .iter()
            .filter(|v| {
                let verdict = v.for_outlook(outlook);
                verdict == Verdict::Hold || verdict.is_buy()
            })
            .cloned()
            .collect();
        holds.sort_by(|a, b| b.difference.total_cmp(&a.difference));

        Self {
            buys,
            sells,
            holds,
            all: verdicts,
        }
    }

    pub fn buys_at(&self, position: Position) -> &[MarketVerdict] {
        self.buys.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Verdict row for a player name, matched directly or through its alias.
    pub fn verdict_for(&self, name: &str) -> Option<&MarketVerdict> {
        let found = self.all.iter().find(|v| names_match(&v.name, name));
        if found.is_none() {
            warn!(player = name, "no market verdict for player");
        }
        found
    }
}
