//! League aggregation core.
//!
//! Pulls paginated league membership from the upstream API, fans out to
//! per-entry history and picks fetches, merges everything into a
//! denormalized per-manager dataset, derives per-gameweek champions, and
//! encodes the result as CSV for export. All upstream access goes through
//! the [`fplboard_fpl::FplApi`] trait so the whole pipeline runs against
//! in-memory doubles in tests.

mod aggregate;
mod champions;
mod error;
pub mod export;
mod types;

pub use aggregate::{aggregate_league, PicksMode};
pub use champions::derive_champions;
pub use error::AggregateError;
pub use types::{
    CaptainPick, ChampionEntry, ChipUse, GameweekChampion, GameweekRange, LeagueDataset,
    ManagerStanding,
};
