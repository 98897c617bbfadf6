//! `carddex.toml` loading.
//!
//! The config file is optional; absent or unparseable files fall back to
//! defaults with a warning. Unknown keys trigger a warning with a typo
//! suggestion.

use std::path::Path;
use tracing::{debug, warn};

/// Known keys in `carddex.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["endpoint", "timeout_secs"];

/// Runtime configuration for the search client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the card search server. A path prefix is kept whether
    /// or not it ends in '/'; the client normalizes before joining.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { endpoint: "http://127.0.0.1:5000/".to_string(), timeout_secs: 10 }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

impl ClientConfig {
    /// Load configuration from `carddex.toml` in the given directory.
    ///
    /// Returns defaults merged with any overrides from the config file.
    pub fn load(dir: &Path) -> Self {
        let mut config = Self::default();
        let config_path = dir.join("carddex.toml");

        if !config_path.exists() {
            return config;
        }

        debug!("Loading carddex.toml");
        let Ok(content) = std::fs::read_to_string(&config_path) else {
            warn!("Failed to read carddex.toml");
            return config;
        };
        let Ok(table) = content.parse::<toml::Table>() else {
            warn!("Failed to parse carddex.toml");
            return config;
        };

        // Validate keys — warn on unknown
        for key in table.keys() {
            if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                let suggestion =
                    KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k)).unwrap();
                if edit_distance(key, suggestion) <= 3 {
                    warn!(
                        key = key.as_str(),
                        suggestion = *suggestion,
                        "Unknown key in carddex.toml — did you mean '{suggestion}'?"
                    );
                } else {
                    warn!(
                        key = key.as_str(),
                        "Unknown key in carddex.toml (known keys: {})",
                        KNOWN_CONFIG_KEYS.join(", ")
                    );
                }
            }
        }

        if let Some(endpoint) = table.get("endpoint").and_then(|v| v.as_str()) {
            config.endpoint = endpoint.to_string();
        }
        if let Some(secs) = table.get("timeout_secs").and_then(|v| v.as_integer()) {
            if secs > 0 {
                config.timeout_secs = secs as u64;
            } else {
                warn!(timeout_secs = secs, "Ignoring non-positive timeout_secs in carddex.toml");
            }
        }

        config
    }
}
