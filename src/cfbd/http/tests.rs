//! Unit tests for the CFBD client, against a mock server

use super::*;
use crate::cli::types::ids::PlayerId;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client(server: &MockServer) -> CfbdClient {
    CfbdClient::new(&server.uri(), "test-key", UnifiedCache::in_memory(16))
        .unwrap()
        .with_policy(CachePolicy::Bypass)
}

#[cfg(test)]
mod cfbd_http_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_fbs_teams_sorted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/fbs"))
            .and(query_param("year", "2023"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 333, "school": "Alabama", "conference": "SEC"},
                {"id": 2, "school": "Auburn", "conference": "SEC"},
                {"id": 2005, "school": "Air Force", "conference": "Mountain West"}
            ])))
            .mount(&server)
            .await;

        let teams = client(&server).get_fbs_teams(Season::new(2023)).await.unwrap();
        let schools: Vec<&str> = teams.iter().map(|t| t.school.as_str()).collect();
        assert_eq!(schools, vec!["Air Force", "Alabama", "Auburn"]);
    }

    #[tokio::test]
    async fn test_get_team_season_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/season"))
            .and(query_param("year", "2023"))
            .and(query_param("team", "Alabama"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"season": 2023, "team": "Alabama", "conference": "SEC", "statName": "totalYards", "statValue": 5573}
            ])))
            .mount(&server)
            .await;

        let stats = client(&server)
            .get_team_season_stats(Season::new(2023), "Alabama")
            .await
            .unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].stat_value, 5573.0);
    }

    #[tokio::test]
    async fn test_get_games_passes_season_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/games"))
            .and(query_param("seasonType", "postseason"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"week": 1, "homeTeam": "Michigan", "awayTeam": "Alabama", "homePoints": 27, "awayPoints": 20}
            ])))
            .mount(&server)
            .await;

        let games = client(&server)
            .get_games(Season::new(2023), "Alabama", SeasonType::Postseason)
            .await
            .unwrap();
        assert_eq!(games[0].final_score(), Some((27, 20)));
    }

    #[tokio::test]
    async fn test_get_player_season_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/player/season"))
            .and(query_param("team", "Alabama"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"playerId": "1", "player": "A", "category": "passing", "statType": "YDS", "stat": "100"}
            ])))
            .mount(&server)
            .await;

        let rows = client(&server)
            .get_player_season_stats(Season::new(2023), "Alabama")
            .await
            .unwrap();
        assert_eq!(rows[0].player_id, PlayerId::new(1));
    }

    #[tokio::test]
    async fn test_player_search_trims_term() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/player/search"))
            .and(query_param("searchTerm", "Milroe"))
            .and(query_param("year", "2023"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "4432577", "firstName": "Jalen", "lastName": "Milroe", "team": "Alabama"}
            ])))
            .mount(&server)
            .await;

        let hits = client(&server)
            .player_search("  Milroe ", Some(Season::new(2023)))
            .await
            .unwrap();
        assert_eq!(hits[0].display_name(), "Jalen Milroe");
    }

    #[tokio::test]
    async fn test_empty_response_is_empty_vec() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/games"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let games = client(&server)
            .get_games(Season::new(2023), "Nowhere State", SeasonType::Regular)
            .await
            .unwrap();
        assert!(games.is_empty());
    }
}
