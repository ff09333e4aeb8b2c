//! FPL API response types.
//!
//! All types model the JSON structures returned by the public FPL endpoints.
//! Fields the aggregation pipeline does not consume are omitted; serde
//! ignores unknown fields by default, so upstream schema drift in unrelated
//! fields is harmless.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// leagues-classic/{league}/standings/
// ---------------------------------------------------------------------------

/// One page of classic-league standings.
#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    pub standings: StandingsPage,
}

#[derive(Debug, Deserialize)]
pub struct StandingsPage {
    /// Whether a further page of results exists.
    pub has_next: bool,
    pub results: Vec<StandingsRow>,
}

/// A single manager row from the standings table.
#[derive(Debug, Clone, Deserialize)]
pub struct StandingsRow {
    /// Stable numeric entry (team) id, unique across the source system.
    pub entry: i64,
    pub player_name: String,
    pub entry_name: String,
    pub rank: i64,
    /// Full-season total points as reported by the standings table.
    pub total: i64,
}

// ---------------------------------------------------------------------------
// entry/{entry}/history/
// ---------------------------------------------------------------------------

/// Full-season history for one entry. The upstream always returns the whole
/// season regardless of any requested range; callers filter.
#[derive(Debug, Deserialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub current: Vec<GameweekResult>,
    #[serde(default)]
    pub chips: Vec<ChipPlay>,
}

/// Points scored by an entry in a single gameweek.
#[derive(Debug, Deserialize)]
pub struct GameweekResult {
    /// Gameweek index, 1-based.
    pub event: i32,
    pub points: i64,
}

/// A chip activation reported by the history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChipPlay {
    pub name: String,
    pub time: String,
    /// Gameweek in which the chip was played.
    pub event: i32,
}

// ---------------------------------------------------------------------------
// entry/{entry}/event/{gw}/picks/
// ---------------------------------------------------------------------------

/// An entry's lineup picks for one gameweek.
#[derive(Debug, Deserialize)]
pub struct PicksResponse {
    #[serde(default)]
    pub entry_history: Option<PicksEntryHistory>,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

#[derive(Debug, Deserialize)]
pub struct PicksEntryHistory {
    /// Total points the entry scored that gameweek (captain multiplier applied).
    pub points: i64,
}

#[derive(Debug, Deserialize)]
pub struct Pick {
    /// Player (element) id, resolvable via the bootstrap table.
    pub element: i64,
    pub multiplier: i64,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

// ---------------------------------------------------------------------------
// bootstrap-static/
// ---------------------------------------------------------------------------

/// Bulk static reference data. Only the player table is consumed.
#[derive(Debug, Deserialize)]
pub struct BootstrapStatic {
    pub elements: Vec<Element>,
}

/// A player entry from the bootstrap table.
#[derive(Debug, Deserialize)]
pub struct Element {
    pub id: i64,
    pub web_name: String,
}
