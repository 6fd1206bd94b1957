//! Server configuration.
//!
//! Loaded once at startup and shared with every handler through [`crate::AppState`].

use std::env;
use std::path::PathBuf;

pub const DEFAULT_SALT: &str = "scn-salt";
pub const DEFAULT_DB_PATH: &str = ".notepad_db";
pub const DEFAULT_ASSETS_DIR: &str = "static";
pub const DEFAULT_PATH_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set and non-empty")]
    Missing(&'static str),

    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Server-side salt mixed into every password hash.
    pub salt: String,
    /// HMAC key for auth tokens.
    pub secret: String,
    /// Salted hash of the application password. `None` disables the app gate.
    pub app_password: Option<String>,
    pub db_path: PathBuf,
    pub assets_dir: PathBuf,
    /// Length of the random path generated for `GET /`.
    pub path_len: usize,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Env Var            | Default        |
    /// |--------------------|----------------|
    /// | `SCN_SALT`         | `scn-salt`     |
    /// | `SCN_SECRET`       | **required**   |
    /// | `SCN_APP_PASSWORD` | empty (off)    |
    /// | `SCN_DB_PATH`      | `.notepad_db`  |
    /// | `SCN_ASSETS_DIR`   | `static`       |
    /// | `SCN_PATH_LEN`     | `6`            |
    /// | `HOST`             | `127.0.0.1`    |
    /// | `PORT`             | `3000`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("SCN_SECRET").unwrap_or_default();
        if secret.is_empty() {
            return Err(ConfigError::Missing("SCN_SECRET"));
        }

        Ok(Self {
            salt: env::var("SCN_SALT").unwrap_or_else(|_| DEFAULT_SALT.into()),
            secret,
            app_password: env::var("SCN_APP_PASSWORD").ok().filter(|p| !p.is_empty()),
            db_path: env::var("SCN_DB_PATH")
                .unwrap_or_else(|_| DEFAULT_DB_PATH.into())
                .into(),
            assets_dir: env::var("SCN_ASSETS_DIR")
                .unwrap_or_else(|_| DEFAULT_ASSETS_DIR.into())
                .into(),
            path_len: parse_var("SCN_PATH_LEN", DEFAULT_PATH_LEN)?,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_var("PORT", 3000)?,
        })
    }

    /// Salt only, for the `hash` subcommand which needs no secret.
    pub fn salt_from_env() -> String {
        env::var("SCN_SALT").unwrap_or_else(|_| DEFAULT_SALT.into())
    }

    pub fn app_password_enabled(&self) -> bool {
        self.app_password.is_some()
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(default),
    }
}
