//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod blueprint_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = BlueprintError::from(json_error);

        match error {
            BlueprintError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = BlueprintError::from(io_error);

        match error {
            BlueprintError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let error = BlueprintError::from(parse_error);

        match error {
            BlueprintError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = BlueprintError::MissingLeagueId {
            env_var: "FFL_BLUEPRINT_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("FFL_BLUEPRINT_LEAGUE_ID"));
    }

    #[test]
    fn test_domain_error_messages() {
        let error = BlueprintError::InvalidPosition {
            position: "LS".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid position: LS");

        let error = BlueprintError::InvalidSlot {
            slot: "IDP_FLEX".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid roster slot: IDP_FLEX");

        let error = BlueprintError::RosterNotFound { roster_id: 7 };
        assert_eq!(error.to_string(), "Roster 7 not found in league");

        let error = BlueprintError::MissingRankings {
            kind: "weekly".to_string(),
        };
        assert_eq!(error.to_string(), "No weekly rankings loaded");

        let error = BlueprintError::InvalidVerdict {
            verdict: "MAYBE".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid market verdict: MAYBE");
    }

    #[test]
    fn test_error_debug_format() {
        let error = BlueprintError::NoData;
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("NoData"));
    }
}
