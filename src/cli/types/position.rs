//! Fantasy football position types and utilities.

use crate::error::BlueprintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offensive skill positions tracked by the blueprint tools.
///
/// Kickers, defenses and IDP players are not part of any blueprint and are
/// dropped when the player catalog is loaded.
///
/// # Examples
///
/// ```rust
/// use ffl_blueprint::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(qb.to_string(), "QB");
/// assert!("K".parse::<Position>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// Every graded position, in display order.
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = BlueprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(BlueprintError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
