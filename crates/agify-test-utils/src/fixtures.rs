//! Test data shared by the scenarios and the stub service.

use std::time::Duration;

/// Example name from the product requirements
pub const REQUIREMENTS_EXAMPLE: &str = "billybob";

pub const COMMON_NAMES: &[&str] = &[
    "john", "mary", "david", "sarah", "james", "emma", "michael", "jennifer",
];

/// Names the service has (practically) never seen
pub const UNCOMMON_NAMES: &[&str] = &["zyxwvutsrq", "qwertyuiop", "asdfghjkl", "zxcvbnm"];

pub const INTERNATIONAL_NAMES: &[&str] =
    &["josé", "muhammad", "wei", "priya", "olaf", "björn", "andré"];

pub const EDGE_CASE_NAMES: &[&str] = &["a", "ab", "supercalifragilisticexpialidocious", ""];

pub const SPECIAL_CHARACTER_NAMES: &[&str] =
    &["mary-jane", "o'connor", "jean-luc", "john123", "test@user"];

pub const CASE_VARIATIONS: &[&str] = &["ROBERT", "robert", "RoBeRt", "MARY", "mary", "MaRy"];

/// Names used by the parallel request scenario
pub const PARALLEL_NAMES: &[&str] = &["alice", "bob", "charlie", "diana", "edward"];

pub const COUNTRIES: &[&str] = &[
    "US", "GB", "CA", "AU", "DE", "FR", "IT", "ES", "NL", "SE", "NO", "DK",
];

/// Number of requests fired by the rapid succession scenario
pub const RAPID_REQUEST_COUNT: usize = 20;

/// Largest batch the service accepts in one request
pub const MAX_BATCH_SIZE: usize = 10;

pub const MAX_RESPONSE_TIME: Duration = Duration::from_millis(5000);

/// Per-request allowance when judging a batch of parallel calls
pub const PERFORMANCE_THRESHOLD: Duration = Duration::from_millis(2000);

pub const MIN_AGE: u32 = 0;
pub const MAX_AGE: u32 = 150;

pub fn to_owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// `user0`, `user1`, ... for the rapid succession scenario
pub fn rapid_request_names() -> Vec<String> {
    (0..RAPID_REQUEST_COUNT).map(|i| format!("user{}", i)).collect()
}

/// Looks up a name group by the label the feature files use
pub fn name_group(label: &str) -> Option<&'static [&'static str]> {
    match label {
        "common" => Some(COMMON_NAMES),
        "uncommon" => Some(UNCOMMON_NAMES),
        "international" => Some(INTERNATIONAL_NAMES),
        "edge-case" => Some(EDGE_CASE_NAMES),
        "special-character" => Some(SPECIAL_CHARACTER_NAMES),
        "case-variation" => Some(CASE_VARIATIONS),
        _ => None,
    }
}
