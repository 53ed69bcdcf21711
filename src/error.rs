//! Error types for the fantasy blueprint toolkit

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, BlueprintError>;

#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid roster slot: {slot}")]
    InvalidSlot { slot: String },

    #[error("Roster {roster_id} not found in league")]
    RosterNotFound { roster_id: u32 },

    #[error("No {kind} rankings loaded")]
    MissingRankings { kind: String },

    #[error("Invalid market verdict: {verdict}")]
    InvalidVerdict { verdict: String },

    #[error("Sleeper API returned no data")]
    NoData,
}
