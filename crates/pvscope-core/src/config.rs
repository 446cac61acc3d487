use crate::error::{PvError, Result};
use crate::models::{AreaMethod, PvCoefficients};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for PVScope
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub usability_factor: ConfigValue<f64>,
    pub pv_density: ConfigValue<f64>,
    pub solar_irradiance: ConfigValue<f64>,
    pub performance_ratio: ConfigValue<f64>,
    pub co2_per_kwh: ConfigValue<f64>,
    pub area_method: ConfigValue<AreaMethod>,
}

/// Environment variables for the numeric coefficients
const COEFFICIENT_ENV_VARS: [(&str, &str); 5] = [
    ("usability_factor", "PVSCOPE_USABILITY_FACTOR"),
    ("pv_density", "PVSCOPE_PV_DENSITY"),
    ("solar_irradiance", "PVSCOPE_SOLAR_IRRADIANCE"),
    ("performance_ratio", "PVSCOPE_PERFORMANCE_RATIO"),
    ("co2_per_kwh", "PVSCOPE_CO2_PER_KWH"),
];

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            usability_factor: ConfigValue::new(
                PvCoefficients::USABILITY_FACTOR,
                ConfigSource::Default,
            ),
            pv_density: ConfigValue::new(PvCoefficients::PV_DENSITY, ConfigSource::Default),
            solar_irradiance: ConfigValue::new(
                PvCoefficients::SOLAR_IRRADIANCE,
                ConfigSource::Default,
            ),
            performance_ratio: ConfigValue::new(
                PvCoefficients::PERFORMANCE_RATIO,
                ConfigSource::Default,
            ),
            co2_per_kwh: ConfigValue::new(PvCoefficients::CO2_PER_KWH, ConfigSource::Default),
            area_method: ConfigValue::new(AreaMethod::default(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| PvError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| PvError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(value) = file_config.usability_factor {
            self.usability_factor.update(value, ConfigSource::File);
        }

        if let Some(value) = file_config.pv_density {
            self.pv_density.update(value, ConfigSource::File);
        }

        if let Some(value) = file_config.solar_irradiance {
            self.solar_irradiance.update(value, ConfigSource::File);
        }

        if let Some(value) = file_config.performance_ratio {
            self.performance_ratio.update(value, ConfigSource::File);
        }

        if let Some(value) = file_config.co2_per_kwh {
            self.co2_per_kwh.update(value, ConfigSource::File);
        }

        if let Some(method) = file_config.area_method {
            self.area_method.update(method, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        for (key, var) in COEFFICIENT_ENV_VARS {
            let Ok(raw) = env::var(var) else {
                continue;
            };
            match parse_coefficient(key, &raw) {
                Ok(value) => self.coefficient_mut(key).update(value, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid {} value '{}': expected a non-negative number",
                    var,
                    raw
                ),
            }
        }

        // PVSCOPE_AREA_METHOD
        if let Ok(method_str) = env::var("PVSCOPE_AREA_METHOD") {
            match method_str.parse::<AreaMethod>() {
                Ok(method) => self.area_method.update(method, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PVSCOPE_AREA_METHOD value '{}': expected geodesic or spherical",
                    method_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(value) = overrides.usability_factor {
            self.usability_factor.update(value, ConfigSource::Cli);
        }

        if let Some(value) = overrides.pv_density {
            self.pv_density.update(value, ConfigSource::Cli);
        }

        if let Some(value) = overrides.solar_irradiance {
            self.solar_irradiance.update(value, ConfigSource::Cli);
        }

        if let Some(value) = overrides.performance_ratio {
            self.performance_ratio.update(value, ConfigSource::Cli);
        }

        if let Some(value) = overrides.co2_per_kwh {
            self.co2_per_kwh.update(value, ConfigSource::Cli);
        }

        if let Some(method) = overrides.area_method {
            self.area_method.update(method, ConfigSource::Cli);
        }
    }

    /// Assemble the effective coefficient set
    pub fn coefficients(&self) -> Result<PvCoefficients> {
        let coefficients = PvCoefficients {
            usability_factor: self.usability_factor.value,
            pv_density: self.pv_density.value,
            solar_irradiance: self.solar_irradiance.value,
            performance_ratio: self.performance_ratio.value,
            co2_per_kwh: self.co2_per_kwh.value,
            ..PvCoefficients::default()
        };
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        for (key, _) in COEFFICIENT_ENV_VARS {
            let value = self.coefficient(key);
            map.insert(key.to_string(), (value.value.to_string(), value.source));
        }

        map.insert(
            "area_method".to_string(),
            (self.area_method.value.to_string(), self.area_method.source),
        );

        map
    }

    fn coefficient(&self, key: &str) -> &ConfigValue<f64> {
        match key {
            "usability_factor" => &self.usability_factor,
            "pv_density" => &self.pv_density,
            "solar_irradiance" => &self.solar_irradiance,
            "performance_ratio" => &self.performance_ratio,
            _ => &self.co2_per_kwh,
        }
    }

    fn coefficient_mut(&mut self, key: &str) -> &mut ConfigValue<f64> {
        match key {
            "usability_factor" => &mut self.usability_factor,
            "pv_density" => &mut self.pv_density,
            "solar_irradiance" => &mut self.solar_irradiance,
            "performance_ratio" => &mut self.performance_ratio,
            _ => &mut self.co2_per_kwh,
        }
    }
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    usability_factor: Option<f64>,
    pv_density: Option<f64>,
    solar_irradiance: Option<f64>,
    performance_ratio: Option<f64>,
    co2_per_kwh: Option<f64>,
    area_method: Option<AreaMethod>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub usability_factor: Option<f64>,
    pub pv_density: Option<f64>,
    pub solar_irradiance: Option<f64>,
    pub performance_ratio: Option<f64>,
    pub co2_per_kwh: Option<f64>,
    pub area_method: Option<AreaMethod>,
}

/// Parse a coefficient from string
pub fn parse_coefficient(key: &str, s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(PvError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("Invalid value: {}. Expected a finite non-negative number", s),
        }),
    }
}
