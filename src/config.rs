//! Runtime settings read from the environment (after `.env` is loaded).
//! Site address and asset root come from the `[package.metadata.leptos]`
//! block through `leptos::get_configuration` instead.

use std::env;

use actix_cors::Cors;
use leptos::logging::log;

pub const DEFAULT_DATABASE_PATH: &str = "comptoir.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: String,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_path = lookup("DATABASE_PATH").unwrap_or_else(|| {
            log!("DATABASE_PATH not set, using default: {}", DEFAULT_DATABASE_PATH);
            DEFAULT_DATABASE_PATH.to_string()
        });
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            database_path,
            cors_origins,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }

    pub fn cors(&self) -> Cors {
        if self.allows_any_origin() {
            return Cors::permissive();
        }
        self.cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
    }
}
