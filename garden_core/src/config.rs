//! Configuration file support for the garden calculators.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/garden-calc/config.toml` and
//! supplies the defaults the user would otherwise pick on every run: the
//! germination rate, which plant/season/soil to assume, default shapes, and
//! the default crop.

use crate::types::{AreaShape, BedShape, Crop, PlantType, Season, SeedPlantType, SoilType, Variety};
use crate::{seeds::DEFAULT_GERMINATION_RATE, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub seeds: SeedConfig,

    #[serde(default)]
    pub watering: WateringConfig,

    #[serde(default)]
    pub shapes: ShapeConfig,

    #[serde(default)]
    pub harvest: HarvestConfig,
}

/// Seed calculator defaults
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SeedConfig {
    #[serde(default = "default_germination_rate")]
    pub germination_rate: f64,

    #[serde(default)]
    pub plant_type: SeedPlantType,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            germination_rate: default_germination_rate(),
            plant_type: SeedPlantType::default(),
        }
    }
}

/// Watering calculator defaults
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct WateringConfig {
    #[serde(default)]
    pub plant_type: PlantType,

    #[serde(default)]
    pub season: Season,

    #[serde(default)]
    pub soil_type: SoilType,
}

/// Default shapes for the soil and area calculators
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct ShapeConfig {
    #[serde(default)]
    pub soil: BedShape,

    #[serde(default)]
    pub area: AreaShape,
}

/// Harvest calculator defaults
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct HarvestConfig {
    #[serde(default)]
    pub crop: Crop,

    #[serde(default)]
    pub variety: Variety,
}

fn default_germination_rate() -> f64 {
    DEFAULT_GERMINATION_RATE
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("garden-calc").join("config.toml"))
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::default_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject settings that would make every seed calculation meaningless
    pub fn validate(&self) -> Result<()> {
        let rate = self.seeds.germination_rate;
        if !(rate > 0.0 && rate <= 100.0) {
            return Err(Error::Config(format!(
                "seeds.germination_rate must be in (0, 100], got {}",
                rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.seeds.germination_rate, 85.0);
        assert_eq!(config.watering.soil_type, SoilType::Loam);
        assert_eq!(config.harvest.crop, Crop::Tomatoes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[watering]
season = "summer"
soil_type = "sandy"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.watering.season, Season::Summer);
        assert_eq!(config.watering.soil_type, SoilType::Sand);
        assert_eq!(config.watering.plant_type, PlantType::Vegetables); // default
        assert_eq!(config.seeds.germination_rate, 85.0); // default
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.harvest.crop = Crop::Cucumbers;
        config.harvest.variety = Variety::Pickling;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_germination_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[seeds]\ngermination_rate = 0.0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_option_in_file() {
        let err = toml::from_str::<Config>("[watering]\nseason = \"monsoon\"\n").unwrap_err();
        assert!(err.to_string().contains("monsoon"));
    }
}
