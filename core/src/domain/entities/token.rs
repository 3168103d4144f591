//! Claims carried by the signed access token.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "hbnb";

/// Default JWT audience
pub const JWT_AUDIENCE: &str = "hbnb-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Whether the subject is an administrator
    pub is_admin: bool,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `is_admin` - The user's admin flag at issue time
    /// * `expiry_seconds` - Lifetime of the token
    /// * `issuer` / `audience` - Values checked on verification
    pub fn new_access_token(
        user_id: Uuid,
        is_admin: bool,
        expiry_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user_id.to_string(),
            is_admin,
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::MissingClaim {
            claim: "sub".to_string(),
        })
    }

    /// Checks if the claims are past their expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}
