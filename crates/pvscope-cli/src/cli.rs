use clap::{Args, Parser, Subcommand};
use pvscope_core::config::CliConfigOverrides;
use pvscope_core::AreaMethod;
use std::path::PathBuf;

/// PVScope - Rooftop photovoltaic potential estimator
#[derive(Parser, Debug)]
#[command(name = "pvscope")]
#[command(about = "Rooftop photovoltaic potential estimator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML configuration file (defaults to ./pvscope.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub coefficients: CoefficientArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Coefficient overrides, highest configuration precedence
#[derive(Args, Debug, Default)]
pub struct CoefficientArgs {
    /// Fraction of the roof area usable for panels
    #[arg(long, global = true, value_name = "FRACTION")]
    pub usability_factor: Option<f64>,

    /// Installed capacity per usable square meter (kWp/m²)
    #[arg(long, global = true, value_name = "KWP_PER_M2")]
    pub pv_density: Option<f64>,

    /// Annual solar irradiance (kWh/kWp/year)
    #[arg(long, global = true, value_name = "KWH_PER_KWP")]
    pub solar_irradiance: Option<f64>,

    /// System performance ratio
    #[arg(long, global = true, value_name = "RATIO")]
    pub performance_ratio: Option<f64>,

    /// Grid emission factor (kg CO2 per kWh)
    #[arg(long, global = true, value_name = "KG_PER_KWH")]
    pub co2_per_kwh: Option<f64>,
}

impl CoefficientArgs {
    pub fn into_overrides(self, area_method: Option<AreaMethod>) -> CliConfigOverrides {
        CliConfigOverrides {
            usability_factor: self.usability_factor,
            pv_density: self.pv_density,
            solar_irradiance: self.solar_irradiance,
            performance_ratio: self.performance_ratio,
            co2_per_kwh: self.co2_per_kwh,
            area_method,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate PV potential for a roof area in square meters
    Estimate(EstimateArgs),

    /// Measure a GeoJSON polygon and estimate its PV potential
    Measure(MeasureArgs),

    /// Write the estimation for an area to a JSON file
    Export(ExportArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
pub struct EstimateArgs {
    /// Roof area in square meters
    #[arg(allow_negative_numbers = true)]
    pub area_m2: f64,
}

#[derive(Parser, Debug)]
pub struct MeasureArgs {
    /// GeoJSON file path, or an inline GeoJSON document
    pub input: String,

    /// Area algorithm (geodesic or spherical)
    #[arg(long)]
    pub method: Option<AreaMethod>,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Roof area in square meters
    #[arg(allow_negative_numbers = true)]
    pub area_m2: f64,

    /// Output file, or - for standard output
    #[arg(long, short = 'o', default_value = "pv-estimation.json")]
    pub output: PathBuf,
}
