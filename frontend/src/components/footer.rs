use yew::prelude::*;

use crate::version::Version;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col sm:flex-row items-center justify-between gap-2">
                <p class="text-blue-100 text-sm">
                    {"Scores and standings from around the leagues."}
                </p>
                <p class="text-blue-200 text-xs font-mono">
                    {Version::short()}
                </p>
            </div>
        </footer>
    }
}
