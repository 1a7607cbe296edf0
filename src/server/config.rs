use serde::Deserialize;
use std::{
    collections::HashMap,
    env, fs,
    io::ErrorKind,
    net::SocketAddr,
    path::{Path, PathBuf},
};
use tracing::info;
use url::Url;

use crate::{Category, RewriteOptions, server::FeedError};

pub const FEED_URL_VAR: &str = "TRIPIT_FEED_URL";
pub const BIND_VAR: &str = "TRAVELMOJI_BIND";
pub const CONFIG_PATH_VAR: &str = "TRAVELMOJI_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "travelmoji.toml";
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
/// 15 minutes
pub const DEFAULT_CACHE_MAX_AGE: u64 = 900;

/// Optional TOML config file.
///
/// ```toml
/// feed_url = "https://www.tripit.com/feed/ical/private/.../tripit.ics"
/// bind = "0.0.0.0:8787"
/// cache_max_age = 900
/// train = false
///
/// [emoji]
/// flight = "🛫"
/// parking = ""
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub feed_url: Option<String>,
    pub bind: Option<String>,
    pub cache_max_age: Option<u64>,
    pub train: Option<bool>,
    /// Glyph overrides keyed by category key. An empty glyph disables the category.
    pub emoji: HashMap<String, String>,
}

impl FileConfig {
    /// Read the file at `path`. A missing file is an empty config.
    pub fn read(path: &Path) -> Result<Self, FeedError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                info!(path = %path.display(), "loaded config file");
                Ok(toml::from_str(&content)?)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Settings of the feed service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: Url,
    pub bind: SocketAddr,
    pub cache_max_age: u64,
    pub options: RewriteOptions,
}

impl Config {
    /// Load from `.env`, the environment and the optional config file.
    pub fn load() -> Result<Self, FeedError> {
        dotenvy::dotenv().ok();

        let path = env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let file = FileConfig::read(&path)?;

        Self::from_sources(file, env::var(FEED_URL_VAR).ok(), env::var(BIND_VAR).ok())
    }

    /// Merge the config file with environment values, the latter taking precedence.
    pub fn from_sources(
        file: FileConfig,
        feed_url: Option<String>,
        bind: Option<String>,
    ) -> Result<Self, FeedError> {
        let feed_url = non_empty(feed_url)
            .or(non_empty(file.feed_url))
            .ok_or(FeedError::MissingFeedUrl)?;
        let bind = non_empty(bind).or(non_empty(file.bind));

        let mut options = RewriteOptions::default();
        if let Some(train) = file.train {
            options.train = train;
        }
        for (key, glyph) in file.emoji {
            options.emojis.insert(key.parse::<Category>()?, glyph);
        }

        Ok(Config {
            feed_url: Url::parse(feed_url.trim())?,
            bind: bind.as_deref().unwrap_or(DEFAULT_BIND).parse::<SocketAddr>()?,
            cache_max_age: file.cache_max_age.unwrap_or(DEFAULT_CACHE_MAX_AGE),
            options,
        })
    }
}

/// Blank values count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
