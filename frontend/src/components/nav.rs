use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_ITEMS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::Home2, "Ticker"),
    (Route::Basketball, "Basketball"),
    (Route::Football, "Football"),
    (Route::Hockey, "Hockey"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    html! {
        <nav class="bg-gradient-to-r from-slate-800 to-blue-600 text-white">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-14">
                <Link<Route> to={Route::Home} classes="text-xl font-bold tracking-tight">
                    {"Scorefront"}
                </Link<Route>>
                <div class="flex items-center gap-4 sm:gap-6">
                    { for NAV_ITEMS.iter().map(|(route, label)| nav_link(route.clone(), label, &current_route)) }
                </div>
            </div>
        </nav>
    }
}

fn nav_link(route: Route, label: &str, current: &Route) -> Html {
    let classes = if route == *current {
        "text-white font-semibold border-b-2 border-white pb-1"
    } else {
        "text-blue-100 hover:text-white transition-colors duration-200"
    };

    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
