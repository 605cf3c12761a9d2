use serde::{Deserialize, Serialize};

pub const TOKEN_ISSUER: &str = "tubely-access";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    pub iss: String,
    /// User id, as a hyphenated UUID string.
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}
