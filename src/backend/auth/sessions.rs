/**
 * Bearer Tokens
 *
 * Issues and verifies HS256 JWTs carrying the user's identifier. Tokens
 * expire exactly seven days after issuance.
 *
 * Verification failures (malformed token, bad signature, expired, wrong
 * claims) all collapse into the single `InvalidToken` error.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::AppConfig;

/// Token lifetime in seconds (7 days)
pub const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Token verification failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid or expired token")]
pub struct InvalidToken;

/// Signs and verifies bearer tokens with a process-wide secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service from a raw secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create a token service from the application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        if config.uses_dev_secret() {
            tracing::warn!("JWT_SECRET not set. Signing tokens with the development secret.");
        }
        Self::new(&config.jwt_secret)
    }

    /// Issue a token for `user_id`, valid for seven days from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, now_secs())
    }

    /// Issue a token as if it had been created at `issued_at` (Unix seconds)
    pub fn issue_at(
        &self,
        user_id: Uuid,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id,
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify a token and return the user ID it carries
    pub fn verify(&self, token: &str) -> Result<Uuid, InvalidToken> {
        self.verify_claims(token).map(|claims| claims.sub)
    }

    /// Verify a token and return its claims
    pub fn verify_claims(&self, token: &str) -> Result<Claims, InvalidToken> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {:?}", e.kind());
                InvalidToken
            })
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
