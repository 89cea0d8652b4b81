use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data Transfer Object for a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct TeamDto {
    /// Team's ID as assigned by the upstream service
    #[serde(default)]
    pub id: String,

    /// Team's full name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Short code shown in scoreboards (e.g. "BOS", "GB")
    #[validate(length(min = 1, max = 4, message = "Abbreviation must be 1-4 characters"))]
    pub abbreviation: String,

    /// Wins this season
    #[serde(default)]
    pub wins: u32,

    /// Losses this season
    #[serde(default)]
    pub losses: u32,
}

impl TeamDto {
    /// Winning percentage, 0.0 when the team has not played yet
    pub fn win_pct(&self) -> f64 {
        let played = self.wins + self.losses;
        if played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(played)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_without_record_fields() {
        let team: TeamDto =
            serde_json::from_str(r#"{"name":"Boston Celtics","abbreviation":"BOS"}"#).unwrap();

        assert_eq!(team.id, "");
        assert_eq!(team.wins, 0);
        assert_eq!(team.losses, 0);
    }

    #[test]
    fn win_pct_handles_unplayed_season() {
        let team = TeamDto {
            id: String::new(),
            name: "Seattle Kraken".to_string(),
            abbreviation: "SEA".to_string(),
            wins: 0,
            losses: 0,
        };

        assert_eq!(team.win_pct(), 0.0);
    }

    #[test]
    fn validates_abbreviation_length() {
        let team = TeamDto {
            id: String::new(),
            name: "Green Bay Packers".to_string(),
            abbreviation: "PACKERS".to_string(),
            wins: 0,
            losses: 0,
        };

        assert!(team.validate().is_err());
    }
}
