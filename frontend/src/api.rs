// Re-export all API modules
pub mod nba;
pub mod nfl;
pub mod nhl;

use crate::config::SportConfig;

/// Builds a full request URL for one sports-data service.
///
/// At most one leading `/` is dropped from `path` and at most one trailing
/// `/` from the resolved base URL before joining, so callers may write
/// `"teams"` or `"/teams"` interchangeably. Nothing else is normalized;
/// odd inputs produce odd URLs rather than errors.
pub fn api_url(config: &SportConfig, path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    let base = config.base_url();
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{}/{}", base, path)
}
