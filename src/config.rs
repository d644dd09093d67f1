use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jiff::Timestamp;
use mapping::{HtmlFormatter, LocalResolver, RenderOptions, Serializer};
use serde::Deserialize;

#[derive(Clone, Default, Debug, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) activity_pub: ActivityPubConfig,
    pub(crate) render: RenderConfig,
    pub(crate) server: ServerConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub(crate) struct ActivityPubConfig {
    /// Origin of local objects, e.g. `https://social.example`.
    pub(crate) base_url: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub(crate) struct RenderConfig {
    pub(crate) allow_inlining: bool,
    pub(crate) force_approval_id: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub(crate) struct ServerConfig {
    pub(crate) http_port: u16,
    pub(crate) fixture_dir: PathBuf,
}

impl Default for ActivityPubConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            allow_inlining: true,
            force_approval_id: false,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            fixture_dir: PathBuf::from("fixtures"),
        }
    }
}

impl Config {
    /// Reads `path` when given, defaults otherwise.
    pub(crate) fn load(path: Option<&Path>) -> Result<Config> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub(crate) fn serializer(&self) -> Serializer {
        Serializer::new(LocalResolver::new(&self.activity_pub.base_url), HtmlFormatter)
    }
}

impl RenderConfig {
    pub(crate) fn options(&self, now: Timestamp) -> RenderOptions {
        RenderOptions::new(now)
            .with_allow_inlining(self.allow_inlining)
            .with_force_approval_id(self.force_approval_id)
    }
}
