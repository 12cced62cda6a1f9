//! Host-facing generation options, loaded from a JSON5 file.

use std::{fs, io, path::Path};

use serde::Deserialize;

use crate::height::{REFERENCE_HEIGHT, SCALE_THRESHOLD};

/// Default config written on first run. JSON5 so the comments survive.
const DEFAULT_CONFIG: &str = r#"{
    // Replace the vanilla ore placed-features with the height-scaled
    // equivalents, so datapacks cannot re-route ore spawning around them.
    override_vanilla_ores: true,

    // Log every vanilla placed-feature that gets replaced.
    log_vanilla_ore_override: false,

    // Read the world's real top Y at runtime. Disable to force the
    // max_world_height value below instead.
    auto_detect_world_height: true,

    // Maximum world height assumed when auto-detection is disabled.
    max_world_height: 2032,
}
"#;

/// Errors from loading or validating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read, or the default could not be written.
    #[error("config io error: {0}")]
    Io(#[from] io::Error),
    /// The file exists but is not valid JSON5.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The parsed values are out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Recognized generation options.
///
/// Loaded once at startup and passed explicitly into every entry point
/// that needs it; there is no global instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OreGenConfig {
    /// Replace the vanilla ore placed-features with the height-scaled
    /// equivalents.
    pub override_vanilla_ores: bool,
    /// Log every vanilla placed-feature that gets replaced.
    pub log_vanilla_ore_override: bool,
    /// Detect the world's top Y at runtime. When disabled,
    /// `max_world_height` is used for all scaling instead.
    pub auto_detect_world_height: bool,
    /// Maximum world height assumed when auto-detection is disabled.
    pub max_world_height: i32,
}

impl Default for OreGenConfig {
    fn default() -> Self {
        Self {
            override_vanilla_ores: true,
            log_vanilla_ore_override: false,
            auto_detect_world_height: true,
            max_world_height: REFERENCE_HEIGHT,
        }
    }
}

impl OreGenConfig {
    /// Loads the config from `path`, writing the commented default file
    /// first if it does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let raw = fs::read_to_string(path)?;
            let config: Self = serde_json5::from_str(&raw)?;
            config.validate()?;
            Ok(config)
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("wrote default ore generation config to {}", path.display());
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_world_height <= SCALE_THRESHOLD {
            return Err(ConfigError::Invalid(
                "max_world_height must be greater than the scale threshold (64)",
            ));
        }
        Ok(())
    }
}
