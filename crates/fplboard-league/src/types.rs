//! Aggregated dataset types.
//!
//! These are the wire shapes returned by the aggregate operation; field
//! names match the upstream-derived JSON contract consumed by the frontend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AggregateError;

/// An inclusive, validated gameweek window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameweekRange {
    start: i32,
    end: i32,
}

impl GameweekRange {
    /// Validates `1 <= start <= end`.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::InvalidRange`] otherwise.
    pub fn new(start: i32, end: i32) -> Result<Self, AggregateError> {
        if start < 1 || end < start {
            return Err(AggregateError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> i32 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> i32 {
        self.end
    }

    #[must_use]
    pub fn contains(self, gameweek: i32) -> bool {
        gameweek >= self.start && gameweek <= self.end
    }

    /// Iterates the gameweeks of the window in ascending order.
    pub fn iter(self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

/// The complete aggregated view returned by one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueDataset {
    #[serde(rename = "leagueData")]
    pub league_data: Vec<ManagerStanding>,
    #[serde(rename = "gameweekChampions")]
    pub gameweek_champions: Vec<GameweekChampion>,
}

/// One denormalized per-manager record.
///
/// `rank` and `total` are passed through verbatim from the standings table;
/// `total` is the full-season total, not a sum over the requested window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerStanding {
    pub rank: i64,
    pub entry: i64,
    pub entry_name: String,
    pub player_name: String,
    pub total: i64,
    /// Points per gameweek, restricted to the requested window. Gameweeks
    /// missing from the source are simply absent and read as zero.
    pub gameweek_points: BTreeMap<i32, i64>,
    pub chips: Vec<ChipUse>,
    pub captains: Vec<CaptainPick>,
}

impl ManagerStanding {
    /// Points scored in `gameweek`, defaulting to zero when absent.
    #[must_use]
    pub fn points_for(&self, gameweek: i32) -> i64 {
        self.gameweek_points.get(&gameweek).copied().unwrap_or(0)
    }
}

/// A chip activation inside the requested window, passed through as the
/// source reports it. Uniqueness per kind is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipUse {
    pub name: String,
    pub time: String,
    pub event: i32,
}

/// Captain and vice-captain selection for one gameweek. Only present for
/// gameweeks whose picks fetch succeeded; a failed fetch leaves a gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptainPick {
    pub gameweek: i32,
    pub captain: String,
    pub captain_points: i64,
    pub vice_captain: String,
    pub vice_captain_points: i64,
}

/// The managers tied for the highest score in one gameweek. Only emitted
/// when that maximum is strictly positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameweekChampion {
    pub gameweek: i32,
    pub champions: Vec<ChampionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionEntry {
    pub player_name: String,
    pub entry_name: String,
    pub points: i64,
}
