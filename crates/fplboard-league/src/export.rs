//! CSV export encoding for the aggregated dataset.
//!
//! Produces two titled tables separated by a blank line, then wraps the
//! combined text in a base64 `data:` URI so the caller can offer it as a
//! download without any server-side file storage.

use base64::engine::general_purpose::STANDARD as Base64;
use base64::Engine as _;

use crate::types::{GameweekRange, LeagueDataset};

/// Renders the dataset as two concatenated CSV tables.
///
/// The standings table has one column per gameweek in the window, with
/// missing scores rendered as 0. The champions table joins tied managers
/// with `"; "` and records the shared top score.
#[must_use]
pub fn to_csv(dataset: &LeagueDataset, range: GameweekRange) -> String {
    let mut league_csv = String::new();
    let mut header: Vec<String> = ["Rank", "Manager", "Team Name", "Total Points"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    header.extend(range.iter().map(|gw| format!("GW{gw}")));
    league_csv.push_str(&header.join(","));
    league_csv.push('\n');

    for manager in &dataset.league_data {
        let mut row = vec![
            manager.rank.to_string(),
            escape_field(&manager.player_name),
            escape_field(&manager.entry_name),
            manager.total.to_string(),
        ];
        row.extend(range.iter().map(|gw| manager.points_for(gw).to_string()));
        league_csv.push_str(&row.join(","));
        league_csv.push('\n');
    }

    let mut champions_csv = String::from("Gameweek,Manager(s),Team Name(s),Points\n");
    for record in &dataset.gameweek_champions {
        let managers = record
            .champions
            .iter()
            .map(|c| c.player_name.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let teams = record
            .champions
            .iter()
            .map(|c| c.entry_name.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let points = record.champions.first().map_or(0, |c| c.points);
        let row = [
            format!("GW{}", record.gameweek),
            escape_field(&managers),
            escape_field(&teams),
            points.to_string(),
        ];
        champions_csv.push_str(&row.join(","));
        champions_csv.push('\n');
    }

    format!("League Standings\n{league_csv}\n\nGameweek Champions\n{champions_csv}")
}

/// Wraps CSV text in a `data:` URI with base64-encoded payload.
#[must_use]
pub fn to_data_uri(csv: &str) -> String {
    format!(
        "data:text/csv;charset=utf-8;base64,{}",
        Base64.encode(csv.as_bytes())
    )
}

/// Standard delimited-text quoting: fields containing the delimiter, a
/// quote, or a newline are wrapped in quotes with internal quotes doubled.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
