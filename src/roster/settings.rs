//! Roster slot requirements: how many of each slot a lineup must fill.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::types::RosterSlot;
use crate::error::{BlueprintError, Result};

/// Ordered mapping of slot to required count.
///
/// Insertion order is preserved; it decides the fill order among slots that
/// share a [`RosterSlot::fill_priority`] bucket.
///
/// # Examples
///
/// ```rust
/// use ffl_blueprint::{RosterSettings, RosterSlot};
///
/// let settings: RosterSettings = "QB=1,RB=2,WR=2,FLEX=1,SUPER_FLEX=1".parse().unwrap();
/// assert_eq!(settings.count(RosterSlot::RB), 2);
/// assert_eq!(settings.total_slots(), 7);
/// assert!(settings.is_superflex());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSettings {
    slots: Vec<(RosterSlot, u32)>,
}

impl RosterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a slot, keeping its original position if already present.
    pub fn set(&mut self, slot: RosterSlot, count: u32) {
        match self.slots.iter_mut().find(|(s, _)| *s == slot) {
            Some(entry) => entry.1 = count,
            None => self.slots.push((slot, count)),
        }
    }

    pub fn with(mut self, slot: RosterSlot, count: u32) -> Self {
        self.set(slot, count);
        self
    }

    /// Configured count for a slot; missing slots count as zero.
    pub fn count(&self, slot: RosterSlot) -> u32 {
        self.slots
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn contains(&self, slot: RosterSlot) -> bool {
        self.slots.iter().any(|(s, _)| *s == slot)
    }

    /// Slots in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (RosterSlot, u32)> + '_ {
        self.slots.iter().copied()
    }

    /// Slots in the order the lineup filler processes them: fixed starters,
    /// then WR_RB_FLEX, WR_TE_FLEX, FLEX, SUPER_FLEX and finally BENCH.
    pub fn fill_order(&self) -> Vec<(RosterSlot, u32)> {
        let mut ordered = self.slots.clone();
        // stable: equal priorities keep configured order
        ordered.sort_by_key(|(slot, _)| slot.fill_priority());
        ordered
    }

    /// Number of lineup entries a fill produces.
    pub fn total_slots(&self) -> usize {
        self.slots.iter().map(|(_, c)| *c as usize).sum()
    }

    /// Starting slots only (everything except BENCH).
    pub fn starter_slots(&self) -> usize {
        self.slots
            .iter()
            .filter(|(s, _)| *s != RosterSlot::Bench)
            .map(|(_, c)| *c as usize)
            .sum()
    }

    /// A league plays superflex when it has a SUPER_FLEX slot or starts
    /// more than one quarterback.
    pub fn is_superflex(&self) -> bool {
        self.count(RosterSlot::SuperFlex) > 0 || self.count(RosterSlot::QB) > 1
    }

    /// Count slot occurrences in a league's `roster_positions` list.
    ///
    /// Unsupported slots (K, DEF, IDP, IR, ...) are skipped.
    pub fn from_roster_positions<S: AsRef<str>>(positions: &[S]) -> Self {
        let mut settings = RosterSettings::new();
        for raw in positions {
            match raw.as_ref().parse::<RosterSlot>() {
                Ok(slot) => {
                    let current = settings.count(slot);
                    settings.set(slot, current + 1);
                }
                Err(_) => debug!(slot = raw.as_ref(), "skipping unsupported roster slot"),
            }
        }
        settings
    }

    /// Settings used when no league is loaded.
    pub fn standard() -> Self {
        RosterSettings::new()
            .with(RosterSlot::QB, 1)
            .with(RosterSlot::RB, 2)
            .with(RosterSlot::WR, 3)
            .with(RosterSlot::TE, 1)
            .with(RosterSlot::Flex, 2)
            .with(RosterSlot::SuperFlex, 1)
            .with(RosterSlot::Bench, 6)
    }
}

impl fmt::Display for RosterSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .slots
            .iter()
            .map(|(slot, count)| format!("{}={}", slot, count))
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for RosterSettings {
    type Err = BlueprintError;

    /// Parse `"QB=1,RB=2,FLEX=1"`. Repeated slots keep the last count.
    fn from_str(s: &str) -> Result<Self> {
        let mut settings = RosterSettings::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (slot, count) = part.split_once('=').ok_or_else(|| BlueprintError::InvalidSlot {
                slot: part.to_string(),
            })?;
            settings.set(slot.parse()?, count.trim().parse()?);
        }
        Ok(settings)
    }
}
