use gloo_net::http::Request;
use log::debug;
use shared::{ErrorResponse, ScoreboardDto, TeamDto};

use crate::api::api_url;
use crate::config::NBA;

/// Full request URL against the basketball service
pub fn nba_api_url(path: &str) -> String {
    api_url(&NBA, path)
}

pub async fn get_teams() -> Result<Vec<TeamDto>, String> {
    debug!("Fetching NBA teams");

    let response = Request::get(&nba_api_url("/teams"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch NBA teams: {}", e))?;

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
        .map_err(|e| format!("Failed to parse NBA teams response: {}", e))?;

    debug!("Successfully fetched {} NBA teams", teams.len());
    Ok(teams)
}

pub async fn get_scoreboard() -> Result<ScoreboardDto, String> {
    debug!("Fetching NBA scoreboard");

    let response = Request::get(&nba_api_url("/scoreboard"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch NBA scoreboard: {}", e))?;

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
        .map_err(|e| format!("Failed to parse NBA scoreboard response: {}", e))?;

    debug!("NBA scoreboard has {} games", board.games.len());
    Ok(board)
}
