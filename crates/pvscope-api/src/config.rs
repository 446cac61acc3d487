use std::env;

use pvscope_core::config::LayeredConfig;
use pvscope_core::error::Result;
use pvscope_core::{AreaMethod, PvCoefficients};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub estimation: LayeredConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            cors_origin: "http://localhost:3000".to_string(),
            estimation: LayeredConfig::with_defaults(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// `PVSCOPE_CONFIG` names an optional TOML file layered beneath the
    /// environment.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PVSCOPE_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3001);

        let cors_origin =
            env::var("PVSCOPE_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let mut estimation = LayeredConfig::with_defaults();
        if let Ok(path) = env::var("PVSCOPE_CONFIG") {
            estimation = estimation.load_from_file(path)?;
        }
        let estimation = estimation.load_from_env();

        Ok(Self { port, cors_origin, estimation })
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn coefficients(&self) -> Result<PvCoefficients> {
        self.estimation.coefficients()
    }

    pub fn area_method(&self) -> AreaMethod {
        self.estimation.area_method.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var("PVSCOPE_PORT");
        env::remove_var("PVSCOPE_CORS_ORIGIN");
        env::remove_var("PVSCOPE_CONFIG");

        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert_eq!(config.coefficients().unwrap(), PvCoefficients::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("PVSCOPE_PORT", "8080");
        env::set_var("PVSCOPE_AREA_METHOD", "spherical");

        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.area_method(), AreaMethod::Spherical);

        env::remove_var("PVSCOPE_PORT");
        env::remove_var("PVSCOPE_AREA_METHOD");
    }

    #[test]
    #[serial]
    fn test_unparsable_port_falls_back() {
        env::set_var("PVSCOPE_PORT", "not-a-port");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.port, 3001);
        env::remove_var("PVSCOPE_PORT");
    }
}
