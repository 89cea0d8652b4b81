use shared::TeamDto;
use yew::prelude::*;

use crate::api::nfl::get_teams;

#[function_component(Football)]
pub fn football() -> Html {
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let teams = use_state(Vec::<TeamDto>::new);

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

    html! {
        <div class="football-page container mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-2">{"NFL Teams"}</h1>
            <p class="text-gray-600 mb-6">{"Season records for every football team."}</p>

            if *loading {
                <p class="text-gray-500">{"Loading..."}</p>
            } else if let Some(e) = error.as_ref() {
                <p class="text-red-600">{format!("Could not load teams: {}", e)}</p>
            } else {
                <table class="w-full text-left text-sm">
                    <thead>
                        <tr class="border-b border-gray-300 text-gray-500">
                            <th class="py-2">{"Team"}</th>
                            <th class="py-2">{"Code"}</th>
                            <th class="py-2 text-right">{"W"}</th>
                            <th class="py-2 text-right">{"L"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for teams.iter().map(|team| html! {
                            <tr class="border-b border-gray-100">
                                <td class="py-2">{&team.name}</td>
                                <td class="py-2 font-mono">{&team.abbreviation}</td>
                                <td class="py-2 text-right">{team.wins}</td>
                                <td class="py-2 text-right">{team.losses}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
