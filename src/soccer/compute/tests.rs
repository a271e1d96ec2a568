//! Unit tests for soccer aggregations

use super::*;
use crate::soccer::types::MatchesResponse;
use serde_json::{json, Value};

fn team(id: u32, name: &str, short: &str, tla: &str) -> Value {
    json!({"id": id, "name": name, "shortName": short, "tla": tla})
}

fn entry(pos: u32, t: Value, played: u32, gf: u32, ga: u32, pts: u32) -> Value {
    let gd = gf as i32 - ga as i32;
    json!({
        "position": pos, "team": t, "playedGames": played,
        "won": 0, "draw": 0, "lost": 0, "points": pts,
        "goalsFor": gf, "goalsAgainst": ga, "goalDifference": gd
    })
}

fn standings() -> StandingsResponse {
    serde_json::from_value(json!({
        "competition": {"code": "PL", "name": "Premier League"},
        "standings": [
            {"type": "HOME", "table": [entry(1, team(1, "Home FC", "Home", "HOM"), 1, 1, 0, 3)]},
            {"type": "TOTAL", "table": [
                entry(1, team(65, "Manchester City FC", "Man City", "MCI"), 38, 96, 34, 89),
                entry(2, team(57, "Arsenal FC", "Arsenal", "ARS"), 38, 91, 29, 89),
                entry(3, team(66, "Manchester United FC", "Man United", "MUN"), 38, 57, 58, 60)
            ]}
        ]
    }))
    .unwrap()
}

fn matches() -> Vec<Match> {
    let resp: MatchesResponse = serde_json::from_value(json!({"matches": [
        {"utcDate": "2023-08-19T14:00:00Z", "matchday": 2, "status": "FINISHED",
         "homeTeam": team(57, "Arsenal FC", "Arsenal", "ARS"),
         "awayTeam": team(1, "Crystal Palace FC", "Crystal Palace", "CRY"),
         "score": {"winner": "HOME_TEAM", "fullTime": {"home": 1, "away": 0}}},
        {"utcDate": "2023-08-12T11:30:00Z", "matchday": 1, "status": "FINISHED",
         "homeTeam": team(2, "Nottingham Forest FC", "Nottingham", "NOT"),
         "awayTeam": team(57, "Arsenal FC", "Arsenal", "ARS"),
         "score": {"winner": "AWAY_TEAM", "fullTime": {"home": 1, "away": 2}}},
        {"utcDate": "2023-08-26T14:00:00Z", "matchday": 3, "status": "FINISHED",
         "homeTeam": team(57, "Arsenal FC", "Arsenal", "ARS"),
         "awayTeam": team(3, "Fulham FC", "Fulham", "FUL"),
         "score": {"winner": "DRAW", "fullTime": {"home": 2, "away": 2}}},
        {"utcDate": "2023-09-03T15:30:00Z", "matchday": 4, "status": "SCHEDULED",
         "homeTeam": team(57, "Arsenal FC", "Arsenal", "ARS"),
         "awayTeam": team(4, "Manchester United FC", "Man United", "MUN"),
         "score": {"winner": null, "fullTime": {"home": null, "away": null}}}
    ]}))
    .unwrap();
    resp.matches
}

#[cfg(test)]
mod standings_tests {
    use super::*;

    #[test]
    fn test_total_table_prefers_total() {
        let resp = standings();
        let table = total_table(&resp);
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].team.name, "Manchester City FC");
    }

    #[test]
    fn test_total_table_falls_back_to_first() {
        let resp: StandingsResponse = serde_json::from_value(json!({
            "standings": [{"type": "HOME", "table": [entry(1, team(1, "A", "A", "AAA"), 2, 3, 1, 6)]}]
        }))
        .unwrap();
        assert_eq!(total_table(&resp).len(), 1);

        let empty: StandingsResponse = serde_json::from_value(json!({"standings": []})).unwrap();
        assert!(total_table(&empty).is_empty());
    }

    #[test]
    fn test_group_stage_tables_are_concatenated() {
        let resp: StandingsResponse = serde_json::from_value(json!({
            "competition": {"code": "CL", "name": "UEFA Champions League"},
            "standings": [
                {"type": "TOTAL", "group": "GROUP_A", "table": [
                    entry(1, team(5, "FC Bayern München", "Bayern", "FCB"), 6, 12, 6, 16),
                    entry(2, team(1876, "FC København", "Copenhagen", "COP"), 6, 8, 8, 8)
                ]},
                {"type": "HOME", "group": "GROUP_A", "table": [
                    entry(1, team(5, "FC Bayern München", "Bayern", "FCB"), 3, 6, 2, 9)
                ]},
                {"type": "TOTAL", "group": "GROUP_C", "table": [
                    entry(1, team(86, "Real Madrid CF", "Real Madrid", "RMA"), 6, 16, 7, 18),
                    entry(2, team(113, "SSC Napoli", "Napoli", "NAP"), 6, 10, 9, 10)
                ]}
            ]
        }))
        .unwrap();

        let rows = standing_rows(&resp);
        let names: Vec<&str> = rows.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(names, vec!["Bayern", "Copenhagen", "Real Madrid", "Napoli"]);
        assert_eq!(rows[0].group.as_deref(), Some("Group A"));
        assert_eq!(rows[3].group.as_deref(), Some("Group C"));

        let table = total_table(&resp);
        assert_eq!(table.len(), 4);
        assert_eq!(find_team(&table, "Real Madrid").unwrap().id, Some(TeamId::new(86)));
        assert_eq!(find_team(&table, "nap").unwrap().id, Some(TeamId::new(113)));

        let bars = points_bars(&rows, 1);
        assert_eq!(bars.bars, vec![("Real Madrid".to_string(), 18.0)]);
    }

    #[test]
    fn test_group_label() {
        assert_eq!(group_label("GROUP_A"), "Group A");
        assert_eq!(group_label("LEAGUE_STAGE"), "League Stage");
    }

    #[test]
    fn test_standing_row_per_game() {
        let rows = standing_rows(&standings());
        assert_eq!(rows[1].team, "Arsenal");
        assert_eq!(rows[1].goal_difference, 62);
        assert_eq!(rows[1].group, None);
        let gf = rows[1].goals_for_per_game().unwrap();
        assert!((gf - 91.0 / 38.0).abs() < 1e-9);
        assert!((rows[0].points_per_game().unwrap() - 89.0 / 38.0).abs() < 1e-9);
    }

    #[test]
    fn test_points_bars_keep_table_order_on_ties() {
        let rows = standing_rows(&standings());
        let bars = points_bars(&rows, 2);
        assert_eq!(
            bars.bars,
            vec![("Man City".to_string(), 89.0), ("Arsenal".to_string(), 89.0)]
        );
    }

    #[test]
    fn test_find_team_exact_then_partial() {
        let resp = standings();
        let table = total_table(&resp);

        assert_eq!(find_team(&table, "ars").unwrap().id, Some(TeamId::new(57)));
        assert_eq!(find_team(&table, "Man United").unwrap().id, Some(TeamId::new(66)));
        // Substring hits the first row in table order.
        assert_eq!(find_team(&table, "manchester").unwrap().id, Some(TeamId::new(65)));
        assert!(find_team(&table, "Atlantis").is_none());
        assert!(find_team(&table, "  ").is_none());
    }
}

#[cfg(test)]
mod scorer_tests {
    use super::*;

    fn scorers() -> Vec<Scorer> {
        serde_json::from_value(json!([
            {"player": {"id": 1, "name": "Mohamed Salah"}, "team": team(64, "Liverpool FC", "Liverpool", "LIV"),
             "playedMatches": 32, "goals": 18, "assists": 10, "penalties": 5},
            {"player": {"id": 2, "name": "Erling Haaland"}, "team": team(65, "Manchester City FC", "Man City", "MCI"),
             "playedMatches": 31, "goals": 27, "assists": 5, "penalties": 7},
            {"player": {"id": 3, "name": "Nobody"}, "team": team(1, "X FC", "X", "XXX"),
             "playedMatches": null, "goals": null}
        ]))
        .unwrap()
    }

    #[test]
    fn test_top_scorers_sorted_and_limited() {
        let top = top_scorers(&scorers(), 2);
        let names: Vec<&str> = top.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(names, vec!["Erling Haaland", "Mohamed Salah"]);
    }

    #[test]
    fn test_goals_per_match() {
        let rows = top_scorers(&scorers(), 3);
        assert!((rows[0].goals_per_match().unwrap() - 27.0 / 31.0).abs() < 1e-9);
        assert_eq!(rows[2].goals, 0);
        assert_eq!(rows[2].goals_per_match(), None);
        assert_eq!(rows[2].cells()[6], CellValue::Empty);
    }
}

#[cfg(test)]
mod match_tests {
    use super::*;

    #[test]
    fn test_match_rows_from_team_view() {
        let rows = match_rows(&matches(), TeamId::new(57));

        // Unplayed fixture dropped, rest sorted by date.
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, "2023-08-12");
        assert_eq!(rows[0].opponent, "Nottingham");
        assert!(!rows[0].home);
        assert_eq!((rows[0].goals_for, rows[0].goals_against), (2, 1));
        assert_eq!(rows[0].score(), "1-2");
        assert_eq!(rows[0].outcome(), Outcome::Win);
        assert_eq!(rows[2].outcome(), Outcome::Draw);
    }

    #[test]
    fn test_match_not_involving_team_is_skipped() {
        assert!(match_rows(&matches(), TeamId::new(999)).is_empty());
    }

    #[test]
    fn test_team_record() {
        let rows = match_rows(&matches(), TeamId::new(57));
        let record = TeamRecord::from_rows(&rows);

        assert_eq!(record.played, 3);
        assert_eq!((record.won, record.drawn, record.lost), (2, 1, 0));
        assert_eq!((record.goals_for, record.goals_against), (5, 3));
        assert_eq!(record.points, 7);
        assert_eq!(record.goal_difference(), 2);
        assert!((record.goals_per_game().unwrap() - 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_record_has_no_averages() {
        let record = TeamRecord::from_rows(&[]);
        assert_eq!(record.played, 0);
        assert_eq!(record.goals_per_game(), None);
    }

    #[test]
    fn test_trends() {
        let rows = match_rows(&matches(), TeamId::new(57));

        let goals = goals_trend(&rows);
        assert_eq!(goals.x_labels, vec!["MD1", "MD2", "MD3"]);
        assert_eq!(goals.lines[0].values, vec![2.0, 1.0, 2.0]);
        assert_eq!(goals.lines[1].values, vec![1.0, 0.0, 2.0]);

        let points = points_trend(&rows);
        assert_eq!(points.lines[0].name, "points");
        assert_eq!(points.lines[0].values, vec![3.0, 6.0, 7.0]);
    }
}
