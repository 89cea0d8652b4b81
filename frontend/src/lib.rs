use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;

pub mod api;
pub mod components;
pub mod config;
pub mod version;
pub mod pages {
    pub mod basketball;
    pub mod football;
    pub mod hockey;
    pub mod home;
    pub mod home2;
}

use pages::{
    basketball::Basketball, football::Football, hockey::Hockey, home::Home, home2::Home2,
};

// Unit test modules only
#[cfg(test)]
mod tests;

/// The route table. Entries are append-only over the app's history; the
/// catch-all is always last so it can never shadow a static route.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/home2")]
    Home2,
    #[at("/basketball")]
    Basketball,
    #[at("/football")]
    Football,
    #[at("/hockey")]
    Hockey,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Maps a browser path to a route. Query strings and fragments are
    /// ignored for matching. Total: empty, malformed, and unknown paths all
    /// resolve to `NotFound`, never to an error.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        if path.is_empty() {
            return Route::NotFound;
        }
        Self::recognize(path).unwrap_or(Route::NotFound)
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Home2 => html! { <Home2 /> },
        Route::Basketball => html! { <Basketball /> },
        Route::Football => html! { <Football /> },
        Route::Hockey => html! { <Hockey /> },
        Route::NotFound => {
            // Unmatched paths reuse the landing view instead of a 404 page
            debug!("Unmatched path, rendering the home view");
            html! { <Home /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <div class="app-container min-h-screen flex flex-col">
                <Nav />
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    // Mount the app
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
