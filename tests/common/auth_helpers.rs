//! Authentication test helpers

use std::time::{SystemTime, UNIX_EPOCH};

use chatline::backend::auth::Claims;
use chatline::backend::server::AppState;

/// A valid token for a plain test user
pub fn valid_token(state: &AppState) -> String {
    state
        .auth
        .issue("tester", "user")
        .expect("token signs")
}

/// A correctly signed token whose `exp` is an hour in the past
pub fn expired_token(state: &AppState) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs();
    let claims = Claims {
        username: "tester".to_string(),
        role: "user".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    state.auth.issue_claims(&claims).expect("token signs")
}
