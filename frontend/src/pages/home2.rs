use shared::ScoreboardDto;
use yew::prelude::*;

use crate::api;

/// Condensed single-column variant of the landing page. Kept alongside
/// `Home` while the two layouts are compared; reachable at `/home2`.
#[function_component(Home2)]
pub fn home2() -> Html {
    let boards = use_state(|| Vec::<(&'static str, Result<ScoreboardDto, String>)>::new());

    {
        let boards = boards.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let mut loaded = Vec::with_capacity(3);
                loaded.push(("NBA", api::nba::get_scoreboard().await));
                loaded.push(("NFL", api::nfl::get_scoreboard().await));
                loaded.push(("NHL", api::nhl::get_scoreboard().await));
                boards.set(loaded);
            });
            || ()
        });
    }

    html! {
        <div class="home2-page container mx-auto px-4 py-8 max-w-2xl">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Scores Ticker"}</h1>
            if boards.is_empty() {
                <p class="text-gray-500">{"Loading..."}</p>
            } else {
                <ul class="divide-y divide-gray-200">
                    { for boards.iter().flat_map(|(league, board)| ticker_lines(league, board)) }
                </ul>
            }
        </div>
    }
}

fn ticker_lines(league: &str, board: &Result<ScoreboardDto, String>) -> Vec<Html> {
    match board {
        Err(e) => vec![html! {
            <li class="py-2 text-sm text-red-600">{format!("{}: {}", league, e)}</li>
        }],
        Ok(board) if board.games.is_empty() => vec![html! {
            <li class="py-2 text-sm text-gray-500">{format!("{}: no games today", league)}</li>
        }],
        Ok(board) => board
            .games
            .iter()
            .map(|game| {
                html! {
                    <li class="py-2 text-sm text-gray-800 flex justify-between">
                        <span class="font-mono">{game.scoreline()}</span>
                        <span class="text-gray-400">{league}</span>
                    </li>
                }
            })
            .collect(),
    }
}
