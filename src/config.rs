// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub engine: EngineConfig,
    pub server: ServerConfig,
    pub search: SearchConfig,
}

/// Connection settings for the article search engine. Credentials are loaded
/// at startup from the config file or environment, never hardcoded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub collection: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results shown per client-side page.
    pub page_length: usize,
    /// Hits requested from the engine for a refined search, windowed
    /// client-side afterwards.
    pub fetch_limit: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("WIKI_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            engine: EngineConfig {
                url: "http://localhost:9200".to_string(),
                username: "elastic".to_string(),
                password: String::new(),
                collection: "wikipedia".to_string(),
                timeout_secs: 10,
            },
            server: ServerConfig {
                bind: "127.0.0.1:3000".to_string(),
            },
            search: SearchConfig {
                page_length: 10,
                fetch_limit: 100,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.engine.url.is_empty() {
            return Err(SearchError::Config(
                "engine url must not be empty".to_string(),
            ));
        }

        if self.engine.timeout_secs == 0 {
            return Err(SearchError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.search.page_length == 0 {
            return Err(SearchError::Config(
                "page_length must be greater than 0".to_string(),
            ));
        }

        if self.search.fetch_limit == 0 {
            return Err(SearchError::Config(
                "fetch_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
