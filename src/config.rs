//! Configuration management.
//!
//! Settings come from an optional TOML file with environment variables
//! layered on top. A missing Gemini credential is a valid configuration:
//! model-backed endpoints degrade to fixed fallback responses.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::llm::GeminiConfig;

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "skillscout.toml";

/// Runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Default bind address for `serve`.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Directory where uploads are staged during processing.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// Gemini client configuration.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            upload_dir: default_upload_dir(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicitly passed path must exist; the default config file is
    /// optional. Environment variables win over file values:
    /// `SKILLSCOUT_BIND`, `SKILLSCOUT_UPLOAD_DIR`, and the `GEMINI_*`
    /// family handled by [`GeminiConfig::with_env_overrides`].
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut settings = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        settings.gemini = settings.gemini.with_env_overrides();
        if let Ok(val) = std::env::var("SKILLSCOUT_BIND") {
            settings.bind = val;
        }
        if let Ok(val) = std::env::var("SKILLSCOUT_UPLOAD_DIR") {
            settings.upload_dir = PathBuf::from(val);
        }

        Ok(settings)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
