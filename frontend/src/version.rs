/// Version information for the frontend application
pub struct Version;

impl Version {
    /// Returns the current version of the application
    pub fn current() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns the application name
    pub fn name() -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    /// Returns a short version string for display
    pub fn short() -> String {
        format!("v{}", Self::current())
    }
}
