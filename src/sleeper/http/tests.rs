//! Unit tests for the Sleeper HTTP client

use super::*;
use crate::cli::types::{PlayerId, RosterId};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_league_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/1180244"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league_id": "1180244",
                "name": "Test League",
                "total_rosters": 10,
                "roster_positions": ["QB", "RB", "WR", "SUPER_FLEX", "BN"]
            })))
            .mount(&mock_server)
            .await;

        let client = SleeperClient::with_base_url(mock_server.uri());
        let league = client.get_league(LeagueId::new(1180244)).await.unwrap();

        assert_eq!(league.league_id, "1180244");
        assert_eq!(league.size(), 10);
        assert!(league.roster_settings().is_superflex());
    }

    #[tokio::test]
    async fn test_get_rosters_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/42/rosters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"roster_id": 1, "owner_id": "u1", "players": ["4984"]},
                {"roster_id": 2, "owner_id": "u2", "players": null}
            ])))
            .mount(&mock_server)
            .await;

        let client = SleeperClient::with_base_url(format!("{}/", mock_server.uri()));
        let rosters = client.get_rosters(LeagueId::new(42)).await.unwrap();

        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].roster_id, RosterId::new(1));
        assert_eq!(rosters[0].player_ids(), &[PlayerId::new("4984")]);
    }

    #[tokio::test]
    async fn test_get_players_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "4984": {"player_id": "4984", "first_name": "Josh", "last_name": "Allen", "position": "QB"}
            })))
            .mount(&mock_server)
            .await;

        let client = SleeperClient::with_base_url(mock_server.uri());
        let players = client.get_players().await.unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players["4984"].last_name.as_deref(), Some("Allen"));
    }

    #[tokio::test]
    async fn test_null_body_is_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/999"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&mock_server)
            .await;

        let client = SleeperClient::with_base_url(mock_server.uri());
        let result = client.get_league(LeagueId::new(999)).await;

        assert!(matches!(result, Err(BlueprintError::NoData)));
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/league/5/rosters"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = SleeperClient::with_base_url(mock_server.uri());
        let result = client.get_rosters(LeagueId::new(5)).await;

        assert!(matches!(result, Err(BlueprintError::Http(_))));
    }
}
