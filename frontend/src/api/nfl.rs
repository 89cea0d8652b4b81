use gloo_net::http::Request;
use log::debug;
use shared::{ErrorResponse, ScoreboardDto, TeamDto};

use crate::api::api_url;
use crate::config::NFL;

/// Full request URL against the football service
pub fn nfl_api_url(path: &str) -> String {
    api_url(&NFL, path)
}

pub async fn get_teams() -> Result<Vec<TeamDto>, String> {
    debug!("Fetching NFL teams");

    let response = Request::get(&nfl_api_url("/teams"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch NFL teams: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let teams = response
        .json::<Vec<TeamDto>>()
        .await
        .map_err(|e| format!("Failed to parse NFL teams response: {}", e))?;

    debug!("Successfully fetched {} NFL teams", teams.len());
    Ok(teams)
}

pub async fn get_scoreboard() -> Result<ScoreboardDto, String> {
    debug!("Fetching NFL scoreboard");

    let response = Request::get(&nfl_api_url("/scoreboard"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch NFL scoreboard: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let board = response
        .json::<ScoreboardDto>()
        .await
        .map_err(|e| format!("Failed to parse NFL scoreboard response: {}", e))?;

    debug!("NFL scoreboard has {} games", board.games.len());
    Ok(board)
}
