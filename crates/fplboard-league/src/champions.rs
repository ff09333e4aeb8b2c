//! Per-gameweek champion derivation over the normalized dataset.

use crate::types::{ChampionEntry, GameweekChampion, GameweekRange, ManagerStanding};

/// Derives the champions of every gameweek in the window.
///
/// For each gameweek the maximum score across all managers is found (absent
/// scores read as zero) and every manager matching it is included — ties are
/// never broken down to a single winner. Gameweeks whose maximum is zero
/// produce no record at all.
#[must_use]
pub fn derive_champions(
    managers: &[ManagerStanding],
    range: GameweekRange,
) -> Vec<GameweekChampion> {
    let mut records = Vec::new();
    for gameweek in range.iter() {
        let max_points = managers
            .iter()
            .map(|manager| manager.points_for(gameweek))
            .max()
            .unwrap_or(0);
        if max_points <= 0 {
            continue;
        }

        let champions = managers
            .iter()
            .filter(|manager| manager.points_for(gameweek) == max_points)
            .map(|manager| ChampionEntry {
                player_name: manager.player_name.clone(),
                entry_name: manager.entry_name.clone(),
                points: max_points,
            })
            .collect();
        records.push(GameweekChampion {
            gameweek,
            champions,
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn manager(name: &str, team: &str, points: &[(i32, i64)]) -> ManagerStanding {
        ManagerStanding {
            rank: 1,
            entry: 1,
            entry_name: team.to_owned(),
            player_name: name.to_owned(),
            total: 0,
            gameweek_points: points.iter().copied().collect::<BTreeMap<_, _>>(),
            chips: Vec::new(),
            captains: Vec::new(),
        }
    }

    fn range(start: i32, end: i32) -> GameweekRange {
        GameweekRange::new(start, end).expect("valid test range")
    }

    #[test]
    fn ties_include_every_manager_at_the_maximum() {
        let managers = vec![
            manager("A", "Team A", &[(1, 50)]),
            manager("B", "Team B", &[(1, 50)]),
            manager("C", "Team C", &[(1, 10)]),
        ];

        let records = derive_champions(&managers, range(1, 1));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gameweek, 1);
        assert_eq!(records[0].champions.len(), 2);
        let names: Vec<&str> = records[0]
            .champions
            .iter()
            .map(|c| c.player_name.as_str())
            .collect();
        assert!(names.contains(&"A"));
        assert!(names.contains(&"B"));
        assert!(!names.contains(&"C"));
        assert!(records[0].champions.iter().all(|c| c.points == 50));
    }

    #[test]
    fn zero_score_gameweeks_are_omitted_entirely() {
        let managers = vec![
            manager("A", "Team A", &[(1, 30)]),
            manager("B", "Team B", &[(1, 20)]),
        ];

        // Gameweek 2 has no scores at all.
        let records = derive_champions(&managers, range(1, 2));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gameweek, 1);
    }

    #[test]
    fn no_managers_yields_no_records() {
        let records = derive_champions(&[], range(1, 38));
        assert!(records.is_empty());
    }

    #[test]
    fn recorded_score_is_the_per_gameweek_maximum() {
        let managers = vec![
            manager("A", "Team A", &[(3, 41), (4, 80)]),
            manager("B", "Team B", &[(3, 77), (4, 12)]),
        ];

        let records = derive_champions(&managers, range(3, 4));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].gameweek, 3);
        assert_eq!(records[0].champions[0].player_name, "B");
        assert_eq!(records[0].champions[0].points, 77);
        assert_eq!(records[1].gameweek, 4);
        assert_eq!(records[1].champions[0].player_name, "A");
        assert_eq!(records[1].champions[0].points, 80);
    }

    #[test]
    fn manager_order_does_not_change_the_champion_set() {
        let forward = vec![
            manager("A", "Team A", &[(1, 50)]),
            manager("B", "Team B", &[(1, 50)]),
        ];
        let reversed: Vec<ManagerStanding> = forward.iter().rev().cloned().collect();

        let from_forward = derive_champions(&forward, range(1, 1));
        let from_reversed = derive_champions(&reversed, range(1, 1));

        let names = |records: &[GameweekChampion]| {
            let mut names: Vec<String> = records[0]
                .champions
                .iter()
                .map(|c| c.player_name.clone())
                .collect();
            names.sort();
            names
        };
        assert_eq!(names(&from_forward), names(&from_reversed));
    }
}
