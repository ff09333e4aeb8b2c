use thiserror::Error;

use fplboard_fpl::FplError;

/// Errors that abort a whole aggregation run.
///
/// Per-item failures (a single entry's history, a single gameweek's picks)
/// never surface here; they are logged and the affected record is dropped.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A fatal upstream fetch failed (membership page or bootstrap table).
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] FplError),

    /// The league exceeds the supported size; reported before any per-entry
    /// fetch is issued.
    #[error(
        "league has {count} managers; this tool only supports leagues with {limit} managers or fewer"
    )]
    TooManyManagers { count: usize, limit: usize },

    /// The requested gameweek range is not `1 <= start <= end`.
    #[error("invalid gameweek range: startGW {start} to endGW {end}")]
    InvalidRange { start: i32, end: i32 },
}
