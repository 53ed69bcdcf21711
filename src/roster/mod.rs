//! Roster reference data: players, the catalog, and slot requirements.

pub mod player;
pub mod settings;

pub use player::{Player, PlayerCatalog, PlayerLookup};
pub use settings::RosterSettings;
