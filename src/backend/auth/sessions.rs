/**
 * Bearer Tokens
 *
 * Issues and verifies the signed tokens handed out by register and login.
 * A token carries the user id, the role and an expiry seven days after
 * issue. There is no server-side session table: a token is valid exactly
 * as long as its signature checks out and its expiry has not passed.
 */

use jsonwebtoken::{
    decode, decode_header, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::Role;

/// Token lifetime in seconds (7 days)
pub const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Secret used when `JWT_SECRET` is not configured
pub const FALLBACK_JWT_SECRET: &str = "secret";

/// Claims carried by every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub role: Role,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::Malformed)
    }
}

/// Why a token was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    SignatureInvalid,

    #[error("Token expired")]
    Expired,

    /// Only raised while issuing
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::SignatureInvalid,
            _ => Self::Malformed,
        }
    }
}

/// HS256 token issuer/verifier bound to one secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service for the given secret
    ///
    /// # Arguments
    /// * `secret` - Shared HMAC secret
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, TOKEN_TTL_SECS)
    }

    pub fn with_ttl(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issue a token for a user, valid from now
    ///
    /// # Returns
    /// Compact token string
    ///
    /// # Errors
    /// `TokenError::Signing` if the token cannot be encoded
    pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.issue_at(user_id, role, jsonwebtoken::get_current_timestamp())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(&self, user_id: Uuid, role: Role, issued_at: u64) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, returning the claims
    ///
    /// # Errors
    /// - `TokenError::Expired` once `exp` has passed (no leeway)
    /// - `TokenError::SignatureInvalid` for a token signed with another secret
    ///   or whose signature segment was altered
    /// - `TokenError::Malformed` for anything that is not a token at all
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode_header(token).map_err(|_| TokenError::Malformed)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        // The signature is checked before the payload is read, so a base64
        // failure past a readable header belongs to the signature segment.
        let token_data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
                ErrorKind::Base64(_) | ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::from(e),
            })?;
        Ok(token_data.claims)
    }
}
