//! Core utilities shared by the command layer
//!
//! - `cache`: file system cache paths and read/write helpers

pub mod cache;

pub use cache::{
    cache_root, league_path, load_or_fetch, players_path, rosters_path, try_read_to_string,
    write_string,
};
