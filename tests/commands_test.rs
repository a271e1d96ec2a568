//! Integration tests for command handlers, against mock APIs

use serde_json::json;
use sports_dash::{
    cfbd::CfbdClient,
    cli::{ApiOptions, CfbCmd, SoccerCmd, SoccerScope},
    commands::{cfb::cfb_sections, format_sections, soccer::soccer_sections},
    core::{CachePolicy, UnifiedCache},
    report::Panel,
    soccer::FootballDataClient,
    CompetitionCode, DashError, Season,
};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn cfbd(server: &MockServer) -> CfbdClient {
    CfbdClient::new(&server.uri(), "test-key", UnifiedCache::in_memory(32))
        .unwrap()
        .with_policy(CachePolicy::Bypass)
}

fn football_data(server: &MockServer) -> FootballDataClient {
    FootballDataClient::new(&server.uri(), "test-token", UnifiedCache::in_memory(32))
        .unwrap()
        .with_policy(CachePolicy::Bypass)
}

async fn mount_player_stats(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/stats/player/season"))
        .and(query_param("team", "Alabama"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"playerId": "1", "player": "Jalen Milroe", "position": "QB", "category": "passing", "statType": "YDS", "stat": "2834"},
            {"playerId": "1", "player": "Jalen Milroe", "position": "QB", "category": "passing", "statType": "TD", "stat": "23"},
            {"playerId": "1", "player": "Jalen Milroe", "position": "QB", "category": "rushing", "statType": "YDS", "stat": "531"},
            {"playerId": "2", "player": "Jase McClellan", "position": "RB", "category": "rushing", "statType": "YDS", "stat": "891"},
            {"playerId": "2", "player": "Jase McClellan", "position": "RB", "category": "rushing", "statType": "CAR", "stat": "180"},
            {"playerId": "3", "player": "Jermaine Burton", "position": "WR", "category": "receiving", "statType": "YDS", "stat": "798"},
            {"playerId": "3", "player": "Jermaine Burton", "position": "WR", "category": "receiving", "statType": "REC", "stat": "39"}
        ])))
        .mount(server)
        .await;
}

fn top_players(categories: Vec<sports_dash::cli::types::options::LeaderCategory>, limit: usize) -> CfbCmd {
    CfbCmd::TopPlayers {
        year: Season::new(2023),
        team: "Alabama".to_string(),
        limit,
        categories,
        api: ApiOptions::default(),
    }
}

#[tokio::test]
async fn test_cfb_top_players_leaderboards() {
    let server = MockServer::start().await;
    mount_player_stats(&server).await;

    let sections = cfb_sections(&top_players(vec![], 2), &cfbd(&server))
        .await
        .unwrap();
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Top Passers (Alabama, 2023)",
            "Top Rushers (Alabama, 2023)",
            "Top Receivers (Alabama, 2023)"
        ]
    );

    let Panel::Table(rushers) = &sections[1].panels[0] else {
        panic!("expected table");
    };
    assert_eq!(rushers.columns, vec!["player", "rushing_yards", "rushing_tds", "rushing_att"]);
    assert_eq!(rushers.rows.len(), 2);
    assert_eq!(rushers.rows[0][0].display(), "Jase McClellan");
    assert_eq!(rushers.rows[1][0].display(), "Jalen Milroe");
}

#[tokio::test]
async fn test_cfb_top_players_rejects_zero_limit() {
    let server = MockServer::start().await;
    let result = cfb_sections(&top_players(vec![], 0), &cfbd(&server)).await;
    assert!(matches!(result, Err(DashError::InvalidArgument { .. })));
}

#[tokio::test]
async fn test_cfb_team_stats_text_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/season"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"season": 2023, "team": "Alabama", "statName": "games", "statValue": 2},
            {"season": 2023, "team": "Alabama", "statName": "totalYards", "statValue": "880"},
            {"season": 2023, "team": "Alabama", "statName": "rushingYards", "statValue": 400},
            {"season": 2023, "team": "Alabama", "statName": "netPassingYards", "statValue": 480}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"week": 1, "start_date": "2023-09-02T23:00:00.000Z", "home_team": "Alabama", "away_team": "Middle Tennessee", "home_points": 56, "away_points": 7},
            {"week": 2, "startDate": "2023-09-09T23:00:00.000Z", "homeTeam": "Alabama", "awayTeam": "Texas", "homePoints": 24, "awayPoints": 34}
        ])))
        .mount(&server)
        .await;

    let cmd = CfbCmd::TeamStats {
        year: Season::new(2023),
        team: "Alabama".to_string(),
        api: ApiOptions::default(),
    };
    let sections = cfb_sections(&cmd, &cfbd(&server)).await.unwrap();
    let text = format_sections(&sections, false, 80).unwrap();

    assert!(text.starts_with("Alabama Team Stats for 2023\n"));
    assert!(text.contains("Record:"));
    assert!(text.contains("1-1"));
    assert!(text.contains("Points per game:"));
    assert!(text.contains("40.0"));
    assert!(text.contains("Yards per game:"));
    assert!(text.contains("440.0"));
    assert!(text.contains("passingYards"));
}

#[tokio::test]
async fn test_cfb_player_not_found_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player/search"))
        .and(query_param("searchTerm", "Nobody Atall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let cmd = CfbCmd::Player {
        name: "Nobody Atall".to_string(),
        year: Season::new(2023),
        api: ApiOptions::default(),
    };
    let sections = cfb_sections(&cmd, &cfbd(&server)).await.unwrap();
    assert_eq!(
        sections[0].panels,
        vec![Panel::Message("No player found with that name.".to_string())]
    );
}

#[tokio::test]
async fn test_cfb_unauthorized_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let cmd = CfbCmd::Teams {
        year: Season::new(2023),
        api: ApiOptions::default(),
    };
    let sections = cfb_sections(&cmd, &cfbd(&server)).await.unwrap();
    let json = format_sections(&sections, true, 80).unwrap();
    assert!(json.contains("CFBD rejected the API key"));
}

#[tokio::test]
async fn test_soccer_standings_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/competitions/BL1/standings"))
        .and(header("x-auth-token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "competition": {"code": "BL1", "name": "Bundesliga"},
            "standings": [{"type": "TOTAL", "table": [
                {"position": 1, "team": {"id": 3, "name": "Bayer 04 Leverkusen", "shortName": "Leverkusen", "tla": "B04"},
                 "playedGames": 34, "won": 28, "draw": 6, "lost": 0, "points": 90,
                 "goalsFor": 89, "goalsAgainst": 24, "goalDifference": 65}
            ]}]
        })))
        .mount(&server)
        .await;

    let cmd = SoccerCmd::Standings {
        scope: SoccerScope {
            competition: "bl1".parse::<CompetitionCode>().unwrap(),
            season: Season::new(2023),
        },
        limit: 5,
        api: ApiOptions::default(),
    };
    let sections = soccer_sections(&cmd, &football_data(&server)).await.unwrap();
    assert_eq!(sections[0].title, "Bundesliga Standings 2023/24");

    let json: serde_json::Value =
        serde_json::from_str(&format_sections(&sections, true, 80).unwrap()).unwrap();
    assert_eq!(json[0]["panels"][0]["kind"], "table");
    assert_eq!(json[0]["panels"][0]["data"]["rows"][0][1], "Leverkusen");
    assert_eq!(json[0]["panels"][1]["kind"], "bars");
}

#[tokio::test]
async fn test_soccer_team_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/competitions/PL/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
        .mount(&server)
        .await;

    let cmd = SoccerCmd::Team {
        scope: SoccerScope {
            competition: CompetitionCode::default(),
            season: Season::new(2023),
        },
        team: "Atlantis".to_string(),
        api: ApiOptions::default(),
    };
    let sections = soccer_sections(&cmd, &football_data(&server)).await.unwrap();
    assert!(sections[0].is_message_only());
    assert!(format_sections(&sections, false, 80)
        .unwrap()
        .contains("Team not found: Atlantis"));
}
