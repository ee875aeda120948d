mod basic;
mod gemini;

pub use basic::BasicConfig;
pub use gemini::GeminiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::KitError;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core settings (see `basic` table in coursekit.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Gemini upstream settings used by the `cv` command.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

pub const DEFAULT_CONFIG_FILE: &str = "coursekit.toml";

/// Prefix for environment overrides, e.g. `COURSEKIT_BASIC__LOGLEVEL=debug`.
const ENV_PREFIX: &str = "COURSEKIT_";

impl Config {
    /// Builds a Figment that merges, lowest to highest priority: defaults, the TOML
    /// file (when present), `COURSEKIT_*` variables, and `GEMINI_API_KEY`.
    pub fn figment(path: &Path) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if path.is_file() {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&["GEMINI_API_KEY"])
                    .map(|_| "gemini.api_key".into()),
            )
    }

    /// Loads configuration from `path` (or `coursekit.toml` in the working directory).
    pub fn load(path: Option<&Path>) -> Result<Self, KitError> {
        let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        let cfg: Self = Self::figment(&path).extract()?;
        Ok(cfg)
    }
}
