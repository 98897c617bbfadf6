//! Wire types for the `/search_dynamic` endpoint.
//!
//! The server owns this data; the client only decodes and renders it.

use serde::Deserialize;
use std::fmt;

/// A cost or power value. The server reports these as integers for normal
/// cards but falls back to strings for specials ("X", "?") and may omit
/// them entirely for unreleased cards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Int(i64),
    Text(String),
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Int(n) => write!(f, "{n}"),
            Stat::Text(s) => f.write_str(s),
        }
    }
}

impl Default for Stat {
    fn default() -> Self {
        Stat::Text("-".to_string())
    }
}

/// One displayable card as returned by the server.
///
/// The image URL field is named `art` on the wire; `image` is accepted as a
/// legacy alias so responses from older server builds still decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(alias = "image")]
    pub art: String,
    #[serde(default, deserialize_with = "stat_or_default")]
    pub cost: Stat,
    #[serde(default, deserialize_with = "stat_or_default")]
    pub power: Stat,
}

/// The cards table allows NULL cost/power, which the server passes through
/// as JSON null.
fn stat_or_default<'de, D>(deserializer: D) -> Result<Stat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Stat>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of search results plus the server-reported page count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageResult {
    pub cards: Vec<Card>,
    #[serde(deserialize_with = "clamp_total_pages")]
    pub total_pages: u32,
}

/// The server computes `ceil(total / page_size)` and reports 0 for an empty
/// table, and its error path reports 1 with no cards. Treat anything below
/// 1 as a single page.
fn clamp_total_pages<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(1, u32::MAX as i64) as u32)
}

impl PageResult {
    /// Page numbers to render as pagination links: `1..=total_pages`, or
    /// nothing at all when there is a single page.
    pub fn page_links(&self) -> Vec<u32> {
        if self.total_pages <= 1 {
            Vec::new()
        } else {
            (1..=self.total_pages).collect()
        }
    }
}
