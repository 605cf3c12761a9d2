use std::path::PathBuf;

use url::Url;
use crate::config::env::{self, ConfigError, EnvKey};

pub const DEFAULT_PORT: u16 = 8091;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub assets_root: PathBuf,
    /// Base for public asset URLs. Always ends in `/`, so relative joins keep its path.
    pub public_base_url: Url,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let server_port = env::get_parsed(EnvKey::ServerPort, DEFAULT_PORT)?;
        let public_base_url = env::get_or(
            EnvKey::PublicBaseUrl,
            &format!("http://localhost:{}", server_port),
        );

        Ok(Self {
            server_port,
            database_url: env::get(EnvKey::DatabaseUrl)?,
            jwt_secret: env::get(EnvKey::JwtSecret)?,
            assets_root: PathBuf::from(env::get_or(EnvKey::AssetsRoot, "./assets")),
            public_base_url: parse_base_url(&public_base_url)?,
        })
    }
}

/// Accepts an absolute http(s) URL and normalises its path to end in `/`.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        key: EnvKey::PublicBaseUrl.as_str(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) URL"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
