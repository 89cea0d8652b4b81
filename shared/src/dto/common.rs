use serde::{Deserialize, Serialize};

/// Common error response returned by the sports-data services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
