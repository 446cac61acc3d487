//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use pvscope_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use pvscope_core::models::{AreaMethod, PvCoefficients};
use pvscope_core::PvEstimator;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const ENV_VARS: [&str; 6] = [
    "PVSCOPE_USABILITY_FACTOR",
    "PVSCOPE_PV_DENSITY",
    "PVSCOPE_SOLAR_IRRADIANCE",
    "PVSCOPE_PERFORMANCE_RATIO",
    "PVSCOPE_CO2_PER_KWH",
    "PVSCOPE_AREA_METHOD",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_configuration() {
    let config = LayeredConfig::with_defaults();

    assert_eq!(config.usability_factor.value, 0.7);
    assert_eq!(config.pv_density.value, 0.18);
    assert_eq!(config.solar_irradiance.value, 1500.0);
    assert_eq!(config.performance_ratio.value, 0.75);
    assert_eq!(config.co2_per_kwh.value, 0.5);
    assert_eq!(config.area_method.value, AreaMethod::Geodesic);
    assert_eq!(config.co2_per_kwh.source, ConfigSource::Default);
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
solar_irradiance = 1200.0
# Only override irradiance, leave others as defaults
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.solar_irradiance.value, 1200.0);
    assert_eq!(config.solar_irradiance.source, ConfigSource::File);
    assert_eq!(config.pv_density.source, ConfigSource::Default);
    assert_eq!(config.area_method.source, ConfigSource::Default);
}

#[test]
fn test_invalid_toml_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "solar_irradiance = \"lots\"").unwrap();

    let result = LayeredConfig::with_defaults().load_from_file(file.path());
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    env::set_var("PVSCOPE_SOLAR_IRRADIANCE", "1800");
    env::set_var("PVSCOPE_AREA_METHOD", "spherical");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
solar_irradiance = 1100.0
pv_density = 0.2
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.solar_irradiance.value, 1800.0);
    assert_eq!(config.solar_irradiance.source, ConfigSource::Environment);
    assert_eq!(config.area_method.value, AreaMethod::Spherical);
    // File value survives where no env var is set
    assert_eq!(config.pv_density.value, 0.2);
    assert_eq!(config.pv_density.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();
    env::set_var("PVSCOPE_PV_DENSITY", "dense");
    env::set_var("PVSCOPE_CO2_PER_KWH", "-0.5");
    env::set_var("PVSCOPE_AREA_METHOD", "planar");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.pv_density.value, 0.18);
    assert_eq!(config.pv_density.source, ConfigSource::Default);
    assert_eq!(config.co2_per_kwh.value, 0.5);
    assert_eq!(config.area_method.value, AreaMethod::Geodesic);

    clear_env();
}

#[test]
#[serial]
fn test_configuration_precedence_order() {
    clear_env();
    env::set_var("PVSCOPE_PERFORMANCE_RATIO", "0.8");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "performance_ratio = 0.7").unwrap();

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();
    assert_eq!(config.performance_ratio.value, 0.8);

    config.update_from_cli(CliConfigOverrides {
        performance_ratio: Some(0.9),
        ..Default::default()
    });

    assert_eq!(config.performance_ratio.value, 0.9);
    assert_eq!(config.performance_ratio.source, ConfigSource::Cli);

    clear_env();
}

#[test]
fn test_tuned_coefficients_feed_estimator() {
    let mut config = LayeredConfig::with_defaults();
    config.update_from_cli(CliConfigOverrides {
        solar_irradiance: Some(1000.0),
        ..Default::default()
    });

    let coefficients = config.coefficients().unwrap();
    assert_eq!(coefficients.solar_irradiance, 1000.0);
    assert_eq!(coefficients.high_threshold_kwp, PvCoefficients::HIGH_THRESHOLD_KWP);

    let estimation = PvEstimator::new(coefficients).unwrap().estimate(1000.0).unwrap();
    // 126 kWp * 1000 * 0.75
    assert!((estimation.annual_yield - 94_500.0).abs() < 1e-6);
}
