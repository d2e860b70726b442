use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single refuel event as entered by the user.
///
/// Odometer and volume are stored in the units the user entered them in:
/// the odometer in km or miles (matching `AppSettings::is_metric`), the
/// volume always in liters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefuelRecord {
    pub id: String,
    pub date_unix: i64,
    pub odometer: f64,
    pub volume: f64,
    pub unit_price: f64,
}

impl RefuelRecord {
    pub fn total_cost(&self) -> f64 {
        self.volume * self.unit_price
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl FromStr for ThemeMode {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to `System`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        })
    }
}

/// User preferences threaded explicitly into every formatting and
/// calculation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub is_metric: bool,
    pub currency: String,
    pub theme_mode: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            is_metric: true,
            currency: "USD".to_string(),
            theme_mode: ThemeMode::System,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub tank_capacity: f64,
}

impl VehicleInfo {
    pub fn display_name(&self) -> String {
        if self.brand.is_empty() && self.model.is_empty() {
            return "My Vehicle".to_string();
        }
        format!("{} {}", self.brand, self.model).trim().to_string()
    }
}
