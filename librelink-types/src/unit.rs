//! Glucose units of measurement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LibreError;

/// Molar conversion factor between mg/dL and mmol/L for glucose.
pub const MG_DL_PER_MMOL_L: f64 = 18.0182;

/// Display unit selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitOfMeasurement {
    /// Milligrams per deciliter, the unit the vendor reports in.
    #[default]
    #[serde(rename = "mg/dL")]
    MgPerDl,
    /// Millimoles per liter.
    #[serde(rename = "mmol/L")]
    MmolPerL,
}

impl UnitOfMeasurement {
    /// All supported units, default first.
    pub const ALL: [Self; 2] = [Self::MgPerDl, Self::MmolPerL];

    /// Unit label as shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MgPerDl => "mg/dL",
            Self::MmolPerL => "mmol/L",
        }
    }

    /// Number of decimals a consumer should display.
    #[must_use]
    pub const fn suggested_display_precision(self) -> u32 {
        match self {
            Self::MgPerDl => 0,
            Self::MmolPerL => 1,
        }
    }

    /// Convert a raw mg/dL reading into this unit without rounding.
    #[must_use]
    pub fn from_mg_per_dl(self, value: f64) -> f64 {
        match self {
            Self::MgPerDl => value,
            Self::MmolPerL => value / MG_DL_PER_MMOL_L,
        }
    }

    /// Convert and round to [`suggested_display_precision`](Self::suggested_display_precision).
    #[must_use]
    pub fn convert_rounded(self, value: f64) -> f64 {
        let scale = 10f64.powi(i32::try_from(self.suggested_display_precision()).unwrap_or(0));
        (self.from_mg_per_dl(value) * scale).round() / scale
    }
}

impl fmt::Display for UnitOfMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitOfMeasurement {
    type Err = LibreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.label() == s)
            .ok_or_else(|| LibreError::InvalidArg(format!("unknown unit of measurement: {s}")))
    }
}
