use std::env;
use std::str::FromStr;

use thiserror::Error;

pub enum EnvKey {
    ServerPort,
    DatabaseUrl,
    JwtSecret,
    AssetsRoot,
    PublicBaseUrl,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::DatabaseUrl => "DATABASE_URL",
            EnvKey::JwtSecret => "JWT_SECRET",
            EnvKey::AssetsRoot => "ASSETS_ROOT",
            EnvKey::PublicBaseUrl => "PUBLIC_BASE_URL",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value `{value}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

pub fn get(key: EnvKey) -> Result<String, ConfigError> {
    let name = key.as_str();
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

/// Parses the variable when it is set; a set but unparsable value is an error.
pub fn get_parsed<T>(key: EnvKey, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    let name = key.as_str();
    parse_or(name, env::var(name).ok(), default)
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key: name,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_value_falls_back_to_default() {
        assert_eq!(parse_or::<u16>("APP_PORT", None, 8091).unwrap(), 8091);
    }

    #[test]
    fn set_value_is_parsed() {
        assert_eq!(parse_or::<u16>("APP_PORT", Some(" 3000 ".into()), 8091).unwrap(), 3000);
    }

    #[test]
    fn unparsable_value_is_reported() {
        let err = parse_or::<u16>("APP_PORT", Some("eighty".into()), 8091).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "APP_PORT", ref value, .. } if value == "eighty"));
    }
}
