/**
 * Auth Request/Response Types
 */

use serde::{Deserialize, Serialize};

/// Response body of the token endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}
