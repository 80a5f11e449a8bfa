//! Process configuration
//!
//! Everything the server reads from the environment, resolved once at startup.

use std::env;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_PORT: u16 = 31113;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let port = parse_or("API_PORT", DEFAULT_PORT)?;

        let origins = env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());

        Ok(Self {
            database_url,
            max_connections,
            port,
            allowed_origins: parse_origins(&origins),
            auth: auth_config()?,
        })
    }
}

fn parse_or<T>(var: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{var} is not a valid value: {raw}")),
        Err(_) => Ok(default),
    }
}

/// Debug builds fall back to development secrets; release builds require them
fn auth_config() -> anyhow::Result<AuthConfig> {
    let session_secret = env::var("AUTH_SESSION_SECRET").ok();
    let key_secret = env::var("PRODUCT_KEY_SECRET").ok();

    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        if session_secret.is_none() {
            bail!("AUTH_SESSION_SECRET must be set in production");
        }
        if key_secret.is_none() {
            bail!("PRODUCT_KEY_SECRET must be set in production");
        }
        AuthConfig::default()
    };

    if let Some(b64) = session_secret {
        config.session_secret = decode_session_secret(&b64)?;
    }
    if let Some(secret) = key_secret {
        config = config.with_product_key_secret(secret);
    }

    config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    Ok(config)
}

fn decode_session_secret(b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(b64.trim())
        .context("AUTH_SESSION_SECRET is not valid base64")?;

    match <[u8; 32]>::try_from(bytes.as_slice()) {
        Ok(secret) => Ok(secret),
        Err(_) => bail!("AUTH_SESSION_SECRET must decode to 32 bytes, got {}", bytes.len()),
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_session_secret() {
        let b64 = general_purpose::STANDARD.encode([7u8; 32]);
        assert_eq!(decode_session_secret(&b64).unwrap(), [7u8; 32]);

        let short = general_purpose::STANDARD.encode([7u8; 16]);
        assert!(decode_session_secret(&short).is_err());
        assert!(decode_session_secret("***").is_err());
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://localhost:3000, https://realty.example.com,,");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://realty.example.com");
    }
}
