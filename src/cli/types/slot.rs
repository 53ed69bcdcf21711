//! Roster slot types: fixed slots, flex slots and the bench.

use super::position::Position;
use crate::error::BlueprintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A starting-lineup slot as configured by a league.
///
/// # Slot Types
///
/// - **Fixed**: QB, RB, WR, TE accept players eligible at that position.
/// - **Flex**: FLEX (RB/WR/TE), WR_RB_FLEX, WR_TE_FLEX and SUPER_FLEX
///   (QB/RB/WR/TE) accept any player eligible at one of their positions.
/// - **Bench**: accepts any player and is always filled last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterSlot {
    QB,
    RB,
    WR,
    TE,
    #[serde(rename = "FLEX")]
    Flex,
    #[serde(rename = "WR_RB_FLEX")]
    WrRbFlex,
    #[serde(rename = "WR_TE_FLEX")]
    WrTeFlex,
    #[serde(rename = "SUPER_FLEX")]
    SuperFlex,
    #[serde(rename = "BENCH")]
    Bench,
}

impl RosterSlot {
    /// Positions a player must be eligible at (any one of) to fill this slot.
    pub fn eligible_positions(&self) -> &'static [Position] {
        use Position::*;
        match self {
            RosterSlot::QB => &[QB],
            RosterSlot::RB => &[RB],
            RosterSlot::WR => &[WR],
            RosterSlot::TE => &[TE],
            RosterSlot::Flex => &[WR, RB, TE],
            RosterSlot::WrRbFlex => &[WR, RB],
            RosterSlot::WrTeFlex => &[WR, TE],
            RosterSlot::SuperFlex | RosterSlot::Bench => &[QB, RB, WR, TE],
        }
    }

    pub fn is_flex(&self) -> bool {
        matches!(
            self,
            RosterSlot::Flex | RosterSlot::WrRbFlex | RosterSlot::WrTeFlex | RosterSlot::SuperFlex
        )
    }

    /// Fill order bucket. Lower buckets pick first; slots in the same bucket
    /// keep their configured order.
    ///
    /// Narrow flexes pick before FLEX, FLEX before SUPER_FLEX, and the bench
    /// only sees players no starting slot wanted.
    pub fn fill_priority(&self) -> u8 {
        match self {
            RosterSlot::QB | RosterSlot::RB | RosterSlot::WR | RosterSlot::TE => 0,
            RosterSlot::WrRbFlex => 1,
            RosterSlot::WrTeFlex => 2,
            RosterSlot::Flex => 3,
            RosterSlot::SuperFlex => 4,
            RosterSlot::Bench => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RosterSlot::QB => "QB",
            RosterSlot::RB => "RB",
            RosterSlot::WR => "WR",
            RosterSlot::TE => "TE",
            RosterSlot::Flex => "FLEX",
            RosterSlot::WrRbFlex => "WR_RB_FLEX",
            RosterSlot::WrTeFlex => "WR_TE_FLEX",
            RosterSlot::SuperFlex => "SUPER_FLEX",
            RosterSlot::Bench => "BENCH",
        }
    }
}

impl fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RosterSlot {
    type Err = BlueprintError;

    /// Accepts both the canonical names and Sleeper's `roster_positions` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(RosterSlot::QB),
            "RB" => Ok(RosterSlot::RB),
            "WR" => Ok(RosterSlot::WR),
            "TE" => Ok(RosterSlot::TE),
            "FLEX" => Ok(RosterSlot::Flex),
            "WR_RB_FLEX" | "WRRB_FLEX" => Ok(RosterSlot::WrRbFlex),
            "WR_TE_FLEX" | "REC_FLEX" => Ok(RosterSlot::WrTeFlex),
            "SUPER_FLEX" | "SUPERFLEX" => Ok(RosterSlot::SuperFlex),
            "BENCH" | "BN" => Ok(RosterSlot::Bench),
            _ => Err(BlueprintError::InvalidSlot {
                slot: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleeper_spellings() {
        assert_eq!("BN".parse::<RosterSlot>().unwrap(), RosterSlot::Bench);
        assert_eq!("WRRB_FLEX".parse::<RosterSlot>().unwrap(), RosterSlot::WrRbFlex);
        assert_eq!("REC_FLEX".parse::<RosterSlot>().unwrap(), RosterSlot::WrTeFlex);
        assert_eq!("super_flex".parse::<RosterSlot>().unwrap(), RosterSlot::SuperFlex);
        assert!("K".parse::<RosterSlot>().is_err());
        assert!("IDP_FLEX".parse::<RosterSlot>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for slot in [
            RosterSlot::QB,
            RosterSlot::RB,
            RosterSlot::WR,
            RosterSlot::TE,
            RosterSlot::Flex,
            RosterSlot::WrRbFlex,
            RosterSlot::WrTeFlex,
            RosterSlot::SuperFlex,
            RosterSlot::Bench,
        ] {
            assert_eq!(slot.to_string().parse::<RosterSlot>().unwrap(), slot);
        }
    }

    #[test]
    fn test_fill_priority_orders_flexes_narrow_to_wide() {
        assert!(RosterSlot::TE.fill_priority() < RosterSlot::WrRbFlex.fill_priority());
        assert!(RosterSlot::WrRbFlex.fill_priority() < RosterSlot::WrTeFlex.fill_priority());
        assert!(RosterSlot::WrTeFlex.fill_priority() < RosterSlot::Flex.fill_priority());
        assert!(RosterSlot::Flex.fill_priority() < RosterSlot::SuperFlex.fill_priority());
        assert!(RosterSlot::SuperFlex.fill_priority() < RosterSlot::Bench.fill_priority());
    }

    #[test]
    fn test_flex_eligibility() {
        assert!(!RosterSlot::Flex.eligible_positions().contains(&Position::QB));
        assert!(RosterSlot::SuperFlex.eligible_positions().contains(&Position::QB));
        assert!(!RosterSlot::WrRbFlex.eligible_positions().contains(&Position::TE));
        assert!(!RosterSlot::WrTeFlex.eligible_positions().contains(&Position::RB));
        assert!(!RosterSlot::Bench.is_flex());
        assert!(RosterSlot::SuperFlex.is_flex());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&RosterSlot::SuperFlex).unwrap(),
            "\"SUPER_FLEX\""
        );
        assert_eq!(
            serde_json::to_string(&RosterSlot::WrRbFlex).unwrap(),
            "\"WR_RB_FLEX\""
        );
        assert_eq!(serde_json::to_string(&RosterSlot::QB).unwrap(), "\"QB\"");
    }
}
