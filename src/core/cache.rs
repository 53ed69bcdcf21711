//! File system cache for upstream league data
//!
//! Everything lives as pretty-printed JSON under `~/.cache/ffl-blueprint/`
//! (or the platform equivalent). Reads that fail for any reason count as a
//! miss; writes that fail are logged and otherwise ignored.

use std::{
    fs,
    future::Future,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{LeagueId, Result};

const CACHE_DIR_NAME: &str = "ffl-blueprint";

/// Path: ~/.cache/ffl-blueprint
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Path: ~/.cache/ffl-blueprint/league_{league_id}.json
pub fn league_path(league_id: LeagueId) -> PathBuf {
    cache_root().join(format!("league_{}.json", league_id.as_u64()))
}

/// Path: ~/.cache/ffl-blueprint/rosters_{league_id}.json
pub fn rosters_path(league_id: LeagueId) -> PathBuf {
    cache_root().join(format!("rosters_{}.json", league_id.as_u64()))
}

/// Path: ~/.cache/ffl-blueprint/players_nfl.json
pub fn players_path() -> PathBuf {
    cache_root().join("players_nfl.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Read `path` unless `refresh` is set; otherwise (or on a miss) run `fetch`
/// and write its result back to `path`.
///
/// A cache file that no longer parses is treated as a miss.
pub async fn load_or_fetch<T, F, Fut>(path: &Path, refresh: bool, fetch: F) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if !refresh {
        if let Some(s) = try_read_to_string(path) {
            match serde_json::from_str::<T>(&s) {
                Ok(value) => {
                    debug!(path = %path.display(), "cache hit");
                    return Ok(value);
                }
                Err(e) => debug!(path = %path.display(), error = %e, "ignoring unreadable cache file"),
            }
        }
    }

    let value = fetch().await?;

    if let Ok(json_str) = serde_json::to_string_pretty(&value) {
        if let Err(e) = write_string(path, &json_str) {
            warn!(path = %path.display(), error = %e, "could not write cache file");
        }
    }

    Ok(value)
}
