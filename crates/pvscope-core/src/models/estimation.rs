use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PvError, Result};

/// Qualitative PV potential tier, derived from installed capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Potential {
    Low,
    Medium,
    High,
}

impl Potential {
    /// Tier for an installed capacity in kWp; each threshold belongs to the higher tier
    pub fn classify(installed_capacity: f64, coefficients: &PvCoefficients) -> Self {
        if installed_capacity >= coefficients.high_threshold_kwp {
            Potential::High
        } else if installed_capacity >= coefficients.medium_threshold_kwp {
            Potential::Medium
        } else {
            Potential::Low
        }
    }

    /// Display colour of the tier on KPI tiles and badges
    pub fn color(&self) -> &'static str {
        match self {
            Potential::High => "#22c55e",
            Potential::Medium => "#eab308",
            Potential::Low => "#ef4444",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Potential::Low => "low",
            Potential::Medium => "medium",
            Potential::High => "high",
        }
    }
}

impl fmt::Display for Potential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Potential {
    type Err = PvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Potential::Low),
            "medium" => Ok(Potential::Medium),
            "high" => Ok(Potential::High),
            _ => Err(PvError::invalid_input(
                "potential",
                format!("Invalid potential: {}. Use low, medium, or high", s),
            )),
        }
    }
}

/// Result of converting a selected area into PV metrics.
///
/// Immutable once produced. A fresh value is built on every selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvEstimation {
    /// Selected area in m²
    pub total_area: f64,
    /// Area suitable for panels in m²
    pub usable_area: f64,
    /// Installable peak power in kWp
    pub installed_capacity: f64,
    /// Energy yield in kWh/year
    pub annual_yield: f64,
    /// Avoided emissions in kg/year
    pub co2_savings: f64,
    pub potential: Potential,
}

impl PvEstimation {
    /// Score above which the overlay is green
    pub const OVERLAY_HIGH_SCORE: f64 = 70.0;
    /// Score above which the overlay is yellow
    pub const OVERLAY_MEDIUM_SCORE: f64 = 40.0;

    /// Installed capacity normalized to 0-100 (capped at 100 kWp), used to
    /// tint a drawn shape on the map
    pub fn overlay_score(&self) -> f64 {
        (self.installed_capacity / 100.0 * 100.0).min(100.0)
    }

    /// Fill colour of the drawn shape. Thresholds are exclusive, unlike the
    /// tier thresholds of [`Potential::classify`].
    pub fn overlay_color(&self) -> &'static str {
        let score = self.overlay_score();
        if score > Self::OVERLAY_HIGH_SCORE {
            Potential::High.color()
        } else if score > Self::OVERLAY_MEDIUM_SCORE {
            Potential::Medium.color()
        } else {
            Potential::Low.color()
        }
    }
}

/// Fixed coefficients of the estimation model.
///
/// These are design constants, not measured data. Defaults must stay as they
/// are; tuning happens through [`crate::config::LayeredConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PvCoefficients {
    /// Fraction of the selected area usable for panels
    pub usability_factor: f64,
    /// kWp per m² of usable area
    pub pv_density: f64,
    /// kWh/m²/year
    pub solar_irradiance: f64,
    /// Fraction of theoretical yield delivered after system losses
    pub performance_ratio: f64,
    /// kg CO2 avoided per kWh
    pub co2_per_kwh: f64,
    /// Lower bound (kWp) of the high tier
    pub high_threshold_kwp: f64,
    /// Lower bound (kWp) of the medium tier
    pub medium_threshold_kwp: f64,
}

impl Default for PvCoefficients {
    fn default() -> Self {
        Self {
            usability_factor: Self::USABILITY_FACTOR,
            pv_density: Self::PV_DENSITY,
            solar_irradiance: Self::SOLAR_IRRADIANCE,
            performance_ratio: Self::PERFORMANCE_RATIO,
            co2_per_kwh: Self::CO2_PER_KWH,
            high_threshold_kwp: Self::HIGH_THRESHOLD_KWP,
            medium_threshold_kwp: Self::MEDIUM_THRESHOLD_KWP,
        }
    }
}

impl PvCoefficients {
    pub const USABILITY_FACTOR: f64 = 0.7;
    pub const PV_DENSITY: f64 = 0.18;
    pub const SOLAR_IRRADIANCE: f64 = 1500.0;
    pub const PERFORMANCE_RATIO: f64 = 0.75;
    pub const CO2_PER_KWH: f64 = 0.5;
    pub const HIGH_THRESHOLD_KWP: f64 = 50.0;
    pub const MEDIUM_THRESHOLD_KWP: f64 = 20.0;

    /// Reject coefficient sets that would produce negative or non-finite metrics
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("usability_factor", self.usability_factor),
            ("pv_density", self.pv_density),
            ("solar_irradiance", self.solar_irradiance),
            ("performance_ratio", self.performance_ratio),
            ("co2_per_kwh", self.co2_per_kwh),
            ("high_threshold_kwp", self.high_threshold_kwp),
            ("medium_threshold_kwp", self.medium_threshold_kwp),
        ];

        for (key, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PvError::ConfigInvalid {
                    key: key.to_string(),
                    reason: format!("must be a finite non-negative number, got {}", value),
                });
            }
        }

        if self.medium_threshold_kwp > self.high_threshold_kwp {
            return Err(PvError::ConfigInvalid {
                key: "medium_threshold_kwp".to_string(),
                reason: format!(
                    "medium threshold {} exceeds high threshold {}",
                    self.medium_threshold_kwp, self.high_threshold_kwp
                ),
            });
        }

        Ok(())
    }
}
