use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Body of `GET /auth/protected`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub message: String,
}

impl ProtectedResponse {
    pub fn greeting(user_id: Uuid) -> Self {
        Self {
            message: format!("Hello, user {}", user_id),
        }
    }
}
