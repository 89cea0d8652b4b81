use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::team::TeamDto;

/// Status of a game as reported by the upstream service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GameStatus {
    #[serde(rename = "scheduled")]
    Scheduled,
    #[serde(rename = "in_progress")]
    InProgress,
    #[serde(rename = "final")]
    Final,
}

/// Data Transfer Object for a single game on a scoreboard
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct GameSummaryDto {
    /// Game's ID as assigned by the upstream service
    #[serde(default)]
    pub id: String,

    /// Home side
    pub home_team: TeamDto,

    /// Away side
    pub away_team: TeamDto,

    /// Home score, absent until the game starts
    #[serde(rename = "home_score")]
    pub home_score: Option<u32>,

    /// Away score, absent until the game starts
    #[serde(rename = "away_score")]
    pub away_score: Option<u32>,

    /// Scheduled start time (UTC)
    #[serde(rename = "start_time")]
    pub start_time: DateTime<Utc>,

    /// Current status
    pub status: GameStatus,
}

impl GameSummaryDto {
    /// Scoreline like "BOS 102 - 99 NYK"; dashes before tip-off
    pub fn scoreline(&self) -> String {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => format!(
                "{} {} - {} {}",
                self.home_team.abbreviation, home, away, self.away_team.abbreviation
            ),
            _ => format!(
                "{} - vs - {}",
                self.home_team.abbreviation, self.away_team.abbreviation
            ),
        }
    }
}

/// One day's slate of games for a league
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ScoreboardDto {
    /// The date the slate belongs to
    pub date: NaiveDate,

    /// Games on that date, in upstream order
    pub games: Vec<GameSummaryDto>,
}
