/// Build-time configuration for one upstream sports-data service.
///
/// Base URLs are baked in at compile time: the build environment may
/// override the default through the variable named by `env_key` (so a
/// deployment can point at a hosted service instead of the local proxy).
/// Absence or an empty value silently falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SportConfig {
    /// Sport name, used in navigation labels and log lines
    pub sport: &'static str,
    /// Compiled-in default base URL
    pub default_base_url: &'static str,
    /// Build-environment variable that overrides the default
    pub env_key: &'static str,
    /// Override captured at compile time, if the variable was set
    pub override_base_url: Option<&'static str>,
}

impl SportConfig {
    /// Resolved base URL: the override when set and non-empty, else the
    /// default. Never fails.
    pub fn base_url(&self) -> &'static str {
        match self.override_base_url {
            Some(url) if !url.is_empty() => url,
            _ => self.default_base_url,
        }
    }
}

/// Basketball (NBA) service
pub const NBA: SportConfig = SportConfig {
    sport: "basketball",
    default_base_url: "http://localhost/api/nba",
    env_key: "NBA_API_BASE_URL",
    override_base_url: option_env!("NBA_API_BASE_URL"),
};

/// Football (NFL) service
pub const NFL: SportConfig = SportConfig {
    sport: "football",
    default_base_url: "http://localhost/api/nfl",
    env_key: "NFL_API_BASE_URL",
    override_base_url: option_env!("NFL_API_BASE_URL"),
};

/// Hockey (NHL) service
pub const NHL: SportConfig = SportConfig {
    sport: "hockey",
    default_base_url: "http://localhost/api/nhl",
    env_key: "NHL_API_BASE_URL",
    override_base_url: option_env!("NHL_API_BASE_URL"),
};

/// All configured services, in navigation order
pub const ALL_SPORTS: [SportConfig; 3] = [NBA, NFL, NHL];
