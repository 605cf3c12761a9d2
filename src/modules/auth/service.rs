use super::dto::{TokenClaims, TOKEN_ISSUER};
use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is missing")]
    MissingHeader,

    #[error("authorization header is not a bearer token")]
    MalformedHeader,

    #[error("token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("token subject is not a user id: {0}")]
    InvalidSubject(#[from] uuid::Error),
}

pub struct AuthService;

impl AuthService {
    /// Pulls the token out of an `Authorization: Bearer <token>` header.
    pub fn get_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AuthError::MalformedHeader)?;

        match value.strip_prefix("Bearer ").map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AuthError::MalformedHeader),
        }
    }

    /// Checks signature, expiry and issuer, and returns the user id in `sub`.
    pub fn validate_jwt(token: &str, secret: &str) -> Result<Uuid, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let claims = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?
        .claims;

        Ok(Uuid::parse_str(&claims.sub)?)
    }

    /// Resolves the acting user from request headers.
    pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<Uuid, AuthError> {
        let token = Self::get_bearer_token(headers)?;
        Self::validate_jwt(token, secret)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};

    pub fn make_jwt(user_id: Uuid, secret: &str, expires_in_secs: i64) -> String {
        let now = get_current_timestamp() as i64;
        let claims = TokenClaims {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            exp: (now + expires_in_secs) as usize,
            iat: now as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }
}
