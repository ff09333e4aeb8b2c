//! The aggregation pipeline: membership, per-entry fan-out, normalization.
//!
//! All upstream fetches within one run are issued strictly sequentially; the
//! upstream is rate limited and the fan-out already costs O(managers) plus
//! O(managers x gameweeks) requests in the captain-enabled path.

use std::collections::{HashMap, HashSet};

use fplboard_core::limits::{MAX_LEAGUE_MANAGERS, MAX_STANDINGS_PAGES};
use fplboard_fpl::types::StandingsRow;
use fplboard_fpl::FplApi;

use crate::champions::derive_champions;
use crate::error::AggregateError;
use crate::types::{CaptainPick, ChipUse, GameweekRange, LeagueDataset, ManagerStanding};

/// Whether the run fetches per-gameweek captain picks.
///
/// The export pipeline skips them; the picks fan-out dominates run time and
/// the CSV output does not use captain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PicksMode {
    Include,
    Skip,
}

/// Runs the full aggregation for one league over one gameweek window.
///
/// Fatal failures (membership pages, the bootstrap player table, an
/// over-ceiling league) abort the run. A failed history fetch drops that
/// manager only; a failed picks fetch drops that single pick only.
///
/// # Errors
///
/// Returns [`AggregateError`] on any fatal failure; no partial result is
/// produced in that case.
pub async fn aggregate_league<C: FplApi>(
    client: &C,
    league_code: &str,
    range: GameweekRange,
    picks: PicksMode,
) -> Result<LeagueDataset, AggregateError> {
    let members = fetch_members(client, league_code).await?;
    tracing::info!(
        league = league_code,
        managers = members.len(),
        start = range.start(),
        end = range.end(),
        "fetched league membership"
    );

    let player_names = match picks {
        PicksMode::Include => Some(fetch_player_names(client).await?),
        PicksMode::Skip => None,
    };

    let mut league_data = Vec::with_capacity(members.len());
    for member in members {
        let history = match client.entry_history(member.entry).await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(
                    entry = member.entry,
                    error = %e,
                    "entry history fetch failed; dropping manager"
                );
                continue;
            }
        };

        let gameweek_points = history
            .current
            .iter()
            .filter(|result| range.contains(result.event))
            .map(|result| (result.event, result.points))
            .collect();

        let chips = history
            .chips
            .into_iter()
            .filter(|chip| range.contains(chip.event))
            .map(|chip| ChipUse {
                name: chip.name,
                time: chip.time,
                event: chip.event,
            })
            .collect();

        let captains = match &player_names {
            Some(names) => fetch_captain_picks(client, member.entry, range, names).await,
            None => Vec::new(),
        };

        league_data.push(ManagerStanding {
            rank: member.rank,
            entry: member.entry,
            entry_name: member.entry_name,
            player_name: member.player_name,
            total: member.total,
            gameweek_points,
            chips,
            captains,
        });
    }

    let gameweek_champions = derive_champions(&league_data, range);
    Ok(LeagueDataset {
        league_data,
        gameweek_champions,
    })
}

/// Fetches the complete, deduplicated league membership across all standings
/// pages, then enforces the manager ceiling before any per-entry fetch.
async fn fetch_members<C: FplApi>(
    client: &C,
    league_code: &str,
) -> Result<Vec<StandingsRow>, AggregateError> {
    let mut members: Vec<StandingsRow> = Vec::new();
    let mut page = 1;
    loop {
        let response = client.league_standings(league_code, page).await?;
        members.extend(response.standings.results);
        if !response.standings.has_next {
            break;
        }
        if page >= MAX_STANDINGS_PAGES {
            tracing::warn!(
                league = league_code,
                pages = page,
                "standings pagination stopped at safety bound"
            );
            break;
        }
        page += 1;
    }

    let mut seen = HashSet::new();
    members.retain(|row| seen.insert(row.entry));

    if members.len() > MAX_LEAGUE_MANAGERS {
        return Err(AggregateError::TooManyManagers {
            count: members.len(),
            limit: MAX_LEAGUE_MANAGERS,
        });
    }
    Ok(members)
}

/// Resolves the bulk player table into an id-to-display-name map, once per
/// run. A failure here is fatal: without names, captain records would be
/// meaningless.
async fn fetch_player_names<C: FplApi>(client: &C) -> Result<HashMap<i64, String>, AggregateError> {
    let bootstrap = client.bootstrap_static().await?;
    Ok(bootstrap
        .elements
        .into_iter()
        .map(|element| (element.id, element.web_name))
        .collect())
}

/// Fetches captain and vice-captain picks for one entry across the window.
///
/// A gameweek whose fetch fails or whose picks lack a flagged captain or
/// vice-captain is omitted from the result, never zero-filled.
async fn fetch_captain_picks<C: FplApi>(
    client: &C,
    entry: i64,
    range: GameweekRange,
    player_names: &HashMap<i64, String>,
) -> Vec<CaptainPick> {
    let resolve = |element: i64| {
        player_names
            .get(&element)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_owned())
    };

    let mut picks_out = Vec::new();
    for gameweek in range.iter() {
        let picks = match client.event_picks(entry, gameweek).await {
            Ok(Some(picks)) => picks,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(entry, gameweek, error = %e, "picks fetch failed; skipping");
                continue;
            }
        };

        let Some(captain) = picks.picks.iter().find(|p| p.is_captain) else {
            continue;
        };
        let Some(vice_captain) = picks.picks.iter().find(|p| p.is_vice_captain) else {
            continue;
        };
        let total = picks.entry_history.as_ref().map_or(0, |h| h.points);

        picks_out.push(CaptainPick {
            gameweek,
            captain: resolve(captain.element),
            // Recovers an un-multiplied base score from the multiplied
            // gameweek total. Known approximation inherited from the
            // upstream data shape, which does not expose the captain's own
            // score here. Keep the floor division as-is.
            captain_points: total / captain.multiplier.max(1),
            vice_captain: resolve(vice_captain.element),
            // The vice-captain's individual score is likewise unavailable;
            // the gameweek total is recorded unchanged.
            vice_captain_points: total,
        });
    }
    picks_out
}
