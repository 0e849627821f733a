//! Configuration for the token issuer

use bs_shared::JwtConfig;
use chrono::Utc;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::expiry_after;
use crate::errors::DomainError;

/// Configuration for the token issuer
#[derive(Debug, Clone)]
pub struct TokenIssuerConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm, one of the HMAC family
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds, reported to clients as `expires_in`
    pub expires_in: i64,
    /// Value of the `iss` claim
    pub issuer: String,
}

/// Mirrors `JwtConfig::default()`, development secret included
impl Default for TokenIssuerConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            algorithm: jwt.algorithm.parse().unwrap_or(Algorithm::HS256),
            jwt_secret: jwt.secret,
            expires_in: jwt.access_token_expiry,
            issuer: jwt.issuer,
        }
    }
}

impl TokenIssuerConfig {
    /// Build from the shared JWT settings
    ///
    /// Only symmetric algorithms are accepted since signing uses a shared secret.
    /// The token lifetime must be positive and small enough that `now + lifetime`
    /// stays a representable timestamp.
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm: Algorithm = config.algorithm.parse().map_err(|_| {
            DomainError::internal(format!("unknown JWT algorithm: {}", config.algorithm))
        })?;

        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::internal(format!(
                "JWT algorithm {:?} needs a key pair, only HMAC algorithms are supported",
                algorithm
            )));
        }

        if expiry_after(Utc::now(), config.access_token_expiry).is_none() {
            return Err(DomainError::internal(format!(
                "JWT access token expiry must be a positive number of seconds within range, got {}",
                config.access_token_expiry
            )));
        }

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            expires_in: config.access_token_expiry,
            issuer: config.issuer.clone(),
        })
    }
}
