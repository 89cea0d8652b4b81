use shared::TeamDto;
use yew::prelude::*;

use crate::api::nba::get_teams;

#[function_component(Basketball)]
pub fn basketball() -> Html {
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let teams = use_state(Vec::<TeamDto>::new);
    let filter = use_state(String::new);

    // Initial load
    {
        let loading = loading.clone();
        let error = error.clone();
        let teams = teams.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_teams().await {
                    Ok(list) => {
                        teams.set(list);
                        loading.set(false);
                    }
                    Err(e) => {
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let on_filter_input = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            filter.set(input.value());
        })
    };

    let needle = filter.to_lowercase();
    let visible: Vec<&TeamDto> = teams
        .iter()
        .filter(|team| {
            needle.is_empty()
                || team.name.to_lowercase().contains(&needle)
                || team.abbreviation.to_lowercase().contains(&needle)
        })
        .collect();

    html! {
        <div class="basketball-page container mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-2">{"NBA Teams"}</h1>
            <p class="text-gray-600 mb-6">{"Season records for every basketball team."}</p>

            <input
                type="text"
                class="w-full sm:w-80 mb-6 px-4 py-2 border border-gray-300 rounded-lg"
                placeholder="Filter by name or code"
                value={(*filter).clone()}
                oninput={on_filter_input}
            />

            if *loading {
                <p class="text-gray-500">{"Loading..."}</p>
            } else if let Some(e) = error.as_ref() {
                <p class="text-red-600">{format!("Could not load teams: {}", e)}</p>
            } else if visible.is_empty() {
                <p class="text-gray-500">{"No teams match the filter."}</p>
            } else {
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="border-b border-gray-300 text-gray-500">
                            <th class="py-2">{"Team"}</th>
                            <th class="py-2">{"Code"}</th>
                            <th class="py-2 text-right">{"W"}</th>
                            <th class="py-2 text-right">{"L"}</th>
                            <th class="py-2 text-right">{"Pct"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|team| team_row(team)) }
                    </tbody>
                </table>
            }
        </div>
    }
}

fn team_row(team: &TeamDto) -> Html {
    html! {
        <tr class="border-b border-gray-100">
            <td class="py-2">{&team.name}</td>
            <td class="py-2 font-mono">{&team.abbreviation}</td>
            <td class="py-2 text-right">{team.wins}</td>
            <td class="py-2 text-right">{team.losses}</td>
            <td class="py-2 text-right">{format!("{:.3}", team.win_pct())}</td>
        </tr>
    }
}
