//! Request-volume bounds against the rate-limited upstream API.
//!
//! Neither constant is a domain limit. The page bound guarantees termination
//! of the standings pagination loop against a misbehaving upstream; the
//! manager ceiling bounds total request volume for the per-entry fan-out,
//! which issues O(managers x gameweeks) requests in the captain-enabled path.

/// Maximum number of standings pages fetched before the pagination loop stops
/// regardless of what the upstream reports.
pub const MAX_STANDINGS_PAGES: u32 = 100;

/// Maximum league size the aggregator will process. Larger leagues are
/// rejected before any per-entry fetch is issued.
pub const MAX_LEAGUE_MANAGERS: usize = 150;
