use crate::api::api_url;
use crate::config::{SportConfig, NBA, NFL, NHL};
use crate::Route;

/// Hockey config as compiled without any build-environment override
fn hockey_defaults() -> SportConfig {
    SportConfig {
        override_base_url: None,
        ..NHL
    }
}

fn with_override(base: &'static str) -> SportConfig {
    SportConfig {
        override_base_url: Some(base),
        ..NBA
    }
}

// Route table resolution

#[test]
fn resolves_static_routes_exactly() {
    assert_eq!(Route::resolve("/"), Route::Home);
    assert_eq!(Route::resolve("/home2"), Route::Home2);
    assert_eq!(Route::resolve("/basketball"), Route::Basketball);
    assert_eq!(Route::resolve("/football"), Route::Football);
    assert_eq!(Route::resolve("/hockey"), Route::Hockey);
}

#[test]
fn unmatched_paths_fall_through_to_not_found() {
    assert_eq!(Route::resolve("/standings"), Route::NotFound);
    assert_eq!(Route::resolve("/basketball/rosters"), Route::NotFound);
    assert_eq!(Route::resolve("/HOME2"), Route::NotFound);
    assert_eq!(Route::resolve("no-leading-slash"), Route::NotFound);
}

#[test]
fn query_and_fragment_are_ignored_for_matching() {
    assert_eq!(Route::resolve("/hockey?date=2024-11-02"), Route::Hockey);
    assert_eq!(Route::resolve("/home2#scores"), Route::Home2);
    assert_eq!(Route::resolve("/?utm_source=newsletter#top"), Route::Home);
}

#[test]
fn degenerate_paths_resolve_to_the_fallback() {
    assert_eq!(Route::resolve(""), Route::NotFound);
    assert_eq!(Route::resolve("?query=only"), Route::NotFound);
    assert_eq!(Route::resolve("#fragment-only"), Route::NotFound);
}

// URL building

#[test]
fn empty_path_yields_base_and_slash() {
    assert_eq!(api_url(&hockey_defaults(), ""), "http://localhost/api/nhl/");
}

#[test]
fn leading_slash_is_optional() {
    let config = hockey_defaults();
    assert_eq!(api_url(&config, "teams"), "http://localhost/api/nhl/teams");
    assert_eq!(api_url(&config, "/teams"), "http://localhost/api/nhl/teams");
}

#[test]
fn trailing_slash_on_override_is_stripped() {
    let config = with_override("https://api.example.com/v2/");
    assert_eq!(api_url(&config, "games"), "https://api.example.com/v2/games");
}

#[test]
fn empty_override_falls_back_to_default() {
    let config = with_override("");
    assert_eq!(config.base_url(), NBA.default_base_url);
    assert_eq!(api_url(&config, "teams"), "http://localhost/api/nba/teams");
}

#[test]
fn hockey_default_serves_player_requests() {
    assert_eq!(
        api_url(&hockey_defaults(), "players"),
        "http://localhost/api/nhl/players"
    );
}

#[test]
fn only_one_leading_slash_is_stripped() {
    // Accepted weak guarantee: odd input, odd URL, no error
    assert_eq!(
        api_url(&hockey_defaults(), "//teams"),
        "http://localhost/api/nhl//teams"
    );
}

#[test]
fn inner_and_trailing_slashes_pass_through() {
    let config = hockey_defaults();
    assert_eq!(
        api_url(&config, "teams/sea/roster"),
        "http://localhost/api/nhl/teams/sea/roster"
    );
    assert_eq!(api_url(&config, "teams/"), "http://localhost/api/nhl/teams/");
}

#[test]
fn domain_configs_point_at_their_services() {
    assert_eq!(NBA.default_base_url, "http://localhost/api/nba");
    assert_eq!(NFL.default_base_url, "http://localhost/api/nfl");
    assert_eq!(NHL.default_base_url, "http://localhost/api/nhl");

    assert_eq!(NBA.env_key, "NBA_API_BASE_URL");
    assert_eq!(NFL.env_key, "NFL_API_BASE_URL");
    assert_eq!(NHL.env_key, "NHL_API_BASE_URL");
}
