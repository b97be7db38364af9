//! HS256 token service issuing access/refresh pairs

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use pf_shared::config::JwtConfig;

use crate::domain::entities::{Claims, RefreshClaims, TokenPair, User};
use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::TokenError;

/// Issues and validates HS256-signed JWTs
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            access_ttl: Duration::seconds(config.access_token_ttl_secs),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl_secs),
        }
    }

    /// Issues an access/refresh pair for a freshly authenticated user
    pub fn generate_pair(&self, user: &User) -> Result<TokenPair, TokenError> {
        let access_claims = Claims::new_access_token(
            user.id,
            user.username.clone(),
            user.full_name.clone(),
            self.access_ttl,
        );
        let refresh_claims = RefreshClaims::new(user.id, self.refresh_ttl);

        let header = Header::new(Algorithm::HS256);
        let access_token = encode(&header, &access_claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)?;
        let refresh_token = encode(&header, &refresh_claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_ttl.num_seconds(),
            refresh_expires_at: Utc::now() + self.refresh_ttl,
        })
    }

    /// Validates an access token and returns its claims
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation())
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }

    /// Validates a refresh token and returns its claims
    pub fn validate_refresh_token(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        decode::<RefreshClaims>(token, &self.decoding_key, &self.validation())
            .map(|data| data.claims)
            .map_err(map_jwt_error)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation
    }
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
            TokenError::InvalidTokenFormat
        }
        _ => TokenError::InvalidClaims,
    }
}
