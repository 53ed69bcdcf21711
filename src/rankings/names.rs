//! Player name normalization and the nickname/suffix alias table.
//!
//! Rank feeds, the player catalog and the market sheet spell names
//! differently ("Cam Ward" vs "Cameron Ward", "Kenneth Walker" vs
//! "Kenneth Walker III"). Lookups compare normalized names first and fall
//! back to the alias table only on a miss.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Known alternate spellings. Every pair resolves in both directions.
pub const ALIAS_PAIRS: &[(&str, &str)] = &[
    ("Tank Dell", "Nathaniel Dell"),
    ("Chig Okonkwo", "Chigoziem Okonkwo"),
    ("Hollywood Brown", "Marquise Brown"),
    ("Tyrone Tracy", "Tyrone Tracy Jr"),
    ("Kenneth Walker", "Kenneth Walker III"),
    ("Michael Penix", "Michael Penix Jr."),
    ("Marvin Harrison", "Marvin Harrison Jr."),
    ("Brian Thomas", "Brian Thomas Jr."),
    ("Cam Ward", "Cameron Ward"),
    ("Harold Fannin", "Harold Fannin Jr."),
    ("Chris Godwin", "Chris Godwin Jr."),
    ("Oronde Gadsden", "Oronde Gadsden II"),
    ("Kyle Pitts", "Kyle Pitts Sr."),
    ("James Cook", "James Cook III"),
    ("Ollie Gordon", "Ollie Gordon II"),
    ("Luther Burden", "Luther Burden III"),
    ("Michael Pittman", "Michael Pittman Jr."),
    ("Aaron Jones", "Aaron Jones Sr."),
    ("Travis Etienne", "Travis Etienne Jr."),
    ("Anthony Richardson", "Anthony Richardson Sr."),
    ("Brian Robinson", "Brian Robinson Jr."),
    ("Marvin Mims", "Marvin Mims Jr."),
    ("Chris Rodriguez", "Chris Rodriguez Jr."),
    ("Ray-Ray McCloud", "Ray-Ray McCloud III"),
    ("LeQuint Allen", "LeQuint Allen Jr."),
    ("Calvin Austin", "Calvin Austin III"),
    ("Dont'e Thornton", "Don'te Thornton Jr."),
    ("Jimmy Horn", "Jimmy Horn Jr."),
];

/// Strip everything but ASCII word characters and lowercase the rest.
///
/// `"De'Von Achane"` and `"DeVon Achane"` both become `"devonachane"`.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn alias_table() -> &'static HashMap<String, String> {
    static TABLE: OnceLock<HashMap<String, String>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::with_capacity(ALIAS_PAIRS.len() * 2);
        for (a, b) in ALIAS_PAIRS {
            let (a, b) = (normalize_name(a), normalize_name(b));
            if a == b {
                continue;
            }
            table.entry(a.clone()).or_insert_with(|| b.clone());
            table.entry(b).or_insert(a);
        }
        table
    })
}

/// Normalized alternate spelling for an already-normalized name.
pub fn alias_for(normalized: &str) -> Option<&'static str> {
    alias_table().get(normalized).map(String::as_str)
}

/// True when two raw names refer to the same player, directly or via alias.
pub fn names_match(a: &str, b: &str) -> bool {
    let (a, b) = (normalize_name(a), normalize_name(b));
    a == b || alias_for(&a) == Some(b.as_str())
}
