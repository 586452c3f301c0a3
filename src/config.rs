//! Platform settings.
//!
//! Read once at startup, either from the environment or from a JSON config document.
//! Every field has a default, so an empty document is a valid configuration. Both sources
//! are validated before use.
//!
//! | variable | field | default |
//! |---|---|---|
//! | `CAMP_BASE_PATH` | `base_path` | `/camp/v11` |
//! | `CAMP_ROOT_NAME` | `root_name` | `Brooklyn CAMP server` |
//! | `CAMP_ROOT_DESCRIPTION` | `root_description` | unset |

use serde::Deserialize;

use crate::error::CampError;
use crate::rest::CAMP_URI_PATH;

pub const DEFAULT_ROOT_NAME: &str = "Brooklyn CAMP server";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Prefix of every URI the platform hands out.
    pub base_path: String,
    pub root_name: String,
    pub root_description: Option<String>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            base_path: CAMP_URI_PATH.to_string(),
            root_name: DEFAULT_ROOT_NAME.to_string(),
            root_description: None,
        }
    }
}

impl PlatformConfig {
    /// Defaults overridden by whichever `CAMP_*` variables are set.
    pub fn from_env() -> Result<Self, CampError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(document: &str) -> Result<Self, CampError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, CampError> {
        let mut config = Self::default();
        if let Some(base_path) = var("CAMP_BASE_PATH") {
            config.base_path = base_path;
        }
        if let Some(name) = var("CAMP_ROOT_NAME") {
            config.root_name = name;
        }
        if let Some(description) = var("CAMP_ROOT_DESCRIPTION") {
            config.root_description = Some(description);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CampError> {
        if !self.base_path.starts_with('/') {
            return Err(CampError::Config {
                key: "CAMP_BASE_PATH",
                reason: format!("`{}` must start with `/`", self.base_path),
            });
        }
        if self.root_name.trim().is_empty() {
            return Err(CampError::Config {
                key: "CAMP_ROOT_NAME",
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }
}
