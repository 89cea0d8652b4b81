use shared::{GameStatus, ScoreboardDto};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::Route;

/// Landing page: today's slate for all three leagues. Also rendered for
/// unmatched paths, so it must not assume anything about the current URL.
#[function_component(Home)]
pub fn home() -> Html {
    let nba_board = use_state(|| None::<Result<ScoreboardDto, String>>);
    let nfl_board = use_state(|| None::<Result<ScoreboardDto, String>>);
    let nhl_board = use_state(|| None::<Result<ScoreboardDto, String>>);

    // Initial load, one request per league
    {
        let nba_board = nba_board.clone();
        let nfl_board = nfl_board.clone();
        let nhl_board = nhl_board.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                nba_board.set(Some(api::nba::get_scoreboard().await));
            });
            wasm_bindgen_futures::spawn_local(async move {
                nfl_board.set(Some(api::nfl::get_scoreboard().await));
            });
            wasm_bindgen_futures::spawn_local(async move {
                nhl_board.set(Some(api::nhl::get_scoreboard().await));
            });
            || ()
        });
    }

    html! {
        <div class="home-page min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50">
            // Hero Section
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center max-w-4xl mx-auto">
                    <h1 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-gray-900 mb-6 leading-tight">
                        <span class="bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent">
                            {"Today Across the Leagues"}
                        </span>
                    </h1>
                    <p class="text-lg sm:text-xl text-gray-600 mb-8 leading-relaxed max-w-3xl mx-auto">
                        {"Live scores and schedules for the NBA, NFL, and NHL in one place."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-8">
                        <Link<Route> to={Route::Basketball} classes="text-blue-600 font-semibold hover:underline">
                            {"Basketball"}
                        </Link<Route>>
                        <Link<Route> to={Route::Football} classes="text-blue-600 font-semibold hover:underline">
                            {"Football"}
                        </Link<Route>>
                        <Link<Route> to={Route::Hockey} classes="text-blue-600 font-semibold hover:underline">
                            {"Hockey"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            // One scoreboard card per league
            <div class="container mx-auto px-4 pb-12 grid grid-cols-1 md:grid-cols-3 gap-6">
                { scoreboard_card("NBA", &nba_board) }
                { scoreboard_card("NFL", &nfl_board) }
                { scoreboard_card("NHL", &nhl_board) }
            </div>
        </div>
    }
}

fn scoreboard_card(league: &str, board: &Option<Result<ScoreboardDto, String>>) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{league}</h2>
            { scoreboard_body(league, board) }
        </div>
    }
}

fn scoreboard_body(league: &str, board: &Option<Result<ScoreboardDto, String>>) -> Html {
    match board {
        None => html! {
            <p class="text-gray-500">{"Loading..."}</p>
        },
        Some(Err(e)) => html! {
            <p class="text-red-600">{format!("Could not load {} games: {}", league, e)}</p>
        },
        Some(Ok(board)) if board.games.is_empty() => html! {
            <p class="text-gray-500">{format!("No {} games on {}.", league, board.date)}</p>
        },
        Some(Ok(board)) => html! {
            <ul class="space-y-2">
                { for board.games.iter().map(game_row) }
            </ul>
        },
    }
}

fn game_row(game: &shared::GameSummaryDto) -> Html {
    let status = match game.status {
        GameStatus::Scheduled => game.start_time.format("%H:%M").to_string(),
        GameStatus::InProgress => "Live".to_string(),
        GameStatus::Final => "Final".to_string(),
    };

    html! {
        <li class="flex justify-between text-sm text-gray-800">
            <span class="font-mono">{game.scoreline()}</span>
            <span class="text-gray-500">{status}</span>
        </li>
    }
}
