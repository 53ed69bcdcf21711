//! Type-safe wrappers and enums for fantasy roster data.

pub mod ids;
pub mod mode;
pub mod position;
pub mod slot;

pub use ids::{LeagueId, PlayerId, RosterId};
pub use mode::{RankMode, TeamOutlook};
pub use position::Position;
pub use slot::RosterSlot;
