use gloo_net::http::Request;
use log::debug;
use shared::{ErrorResponse, ScoreboardDto, TeamDto};

use crate::api::api_url;
use crate::config::NHL;

/// Full request URL against the hockey service
pub fn nhl_api_url(path: &str) -> String {
    api_url(&NHL, path)
}

pub async fn get_teams() -> Result<Vec<TeamDto>, String> {
    debug!("Fetching NHL teams");

    let response = Request::get(&nhl_api_url("/teams"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch NHL teams: {}", e))?;

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
        .map_err(|e| format!("Failed to parse NHL teams response: {}", e))?;

    debug!("Successfully fetched {} NHL teams", teams.len());
    Ok(teams)
}

pub async fn get_scoreboard() -> Result<ScoreboardDto, String> {
    debug!("Fetching NHL scoreboard");

    let response = Request::get(&nhl_api_url("/scoreboard"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch NHL scoreboard: {}", e))?;

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
        .map_err(|e| format!("Failed to parse NHL scoreboard response: {}", e))?;

    debug!("NHL scoreboard has {} games", board.games.len());
    Ok(board)
}
