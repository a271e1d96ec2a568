//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod dash_error_tests {
    use super::*;

    #[test]
    fn test_http_error_conversion() {
        // A malformed URL fails at build time, no network needed
        let reqwest_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let dash_error = DashError::from(reqwest_error);

        match dash_error {
            DashError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
        assert!(DashError::Http(
            reqwest::Client::new().get("::").build().unwrap_err()
        )
        .is_remote());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let dash_error = DashError::from(json_error);

        match dash_error {
            DashError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let dash_error = DashError::from(io_error);

        match dash_error {
            DashError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let dash_error = DashError::from(header_error);

        match dash_error {
            DashError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let dash_error = DashError::from(parse_error);

        match dash_error {
            DashError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_api_key_error() {
        let error = DashError::MissingApiKey {
            env_var: "CFBD_API_KEY".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("API key not provided"));
        assert!(error_string.contains("CFBD_API_KEY"));
        assert!(!error.is_remote());
    }

    #[test]
    fn test_unauthorized_and_rate_limited_are_remote() {
        let unauthorized = DashError::Unauthorized {
            service: "CFBD".to_string(),
        };
        let limited = DashError::RateLimited {
            service: "football-data.org".to_string(),
        };

        assert!(unauthorized.is_remote());
        assert!(limited.is_remote());
        assert!(unauthorized.to_string().starts_with("CFBD rejected"));
        assert!(limited.to_string().contains("rate limit"));
    }

    #[test]
    fn test_invalid_season_error() {
        let error = DashError::InvalidSeason {
            year: 1999,
            min: 2000,
            max: 2025,
        };
        assert_eq!(
            error.to_string(),
            "Season 1999 is outside the supported range 2000..=2025"
        );
    }

    #[test]
    fn test_team_not_found_error() {
        let error = DashError::TeamNotFound {
            name: "Atlantis FC".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Team not found"));
        assert!(error_string.contains("Atlantis FC"));
    }

    #[test]
    fn test_cache_error() {
        let error = DashError::Cache {
            message: "Failed to write cache".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Cache error"));
        assert!(error_string.contains("Failed to write cache"));
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("terminal went away");
        let dash_error = DashError::from(anyhow_error);

        match dash_error {
            DashError::Other(err) => assert!(err.to_string().contains("terminal went away")),
            _ => panic!("Expected Other error variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let dash_error = DashError::from(io_error);

        let error_trait: &dyn std::error::Error = &dash_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(DashError::InvalidArgument {
                message: "limit must be positive".to_string(),
            })
        }

        match test_function().unwrap_err() {
            DashError::InvalidArgument { message } => assert_eq!(message, "limit must be positive"),
            _ => panic!("Expected InvalidArgument error"),
        }
    }
}
