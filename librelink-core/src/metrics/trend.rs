use serde::{Deserialize, Serialize};

use crate::LibreError;

/// Glucose rate-of-change direction encoded by the vendor's `TrendArrow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    /// Arrow 1.
    DecreasingFast,
    /// Arrow 2.
    Decreasing,
    /// Arrow 3.
    Stable,
    /// Arrow 4.
    Increasing,
    /// Arrow 5.
    IncreasingFast,
}

impl Trend {
    /// Decode a `TrendArrow` value.
    ///
    /// # Errors
    /// Returns `Data` for anything outside `1..=5`; there is no fallback trend.
    pub fn from_arrow(arrow: i64) -> Result<Self, LibreError> {
        match arrow {
            1 => Ok(Self::DecreasingFast),
            2 => Ok(Self::Decreasing),
            3 => Ok(Self::Stable),
            4 => Ok(Self::Increasing),
            5 => Ok(Self::IncreasingFast),
            other => Err(LibreError::Data(format!(
                "trend arrow {other} outside 1..=5"
            ))),
        }
    }

    /// The vendor arrow value.
    #[must_use]
    pub const fn arrow(self) -> i64 {
        match self {
            Self::DecreasingFast => 1,
            Self::Decreasing => 2,
            Self::Stable => 3,
            Self::Increasing => 4,
            Self::IncreasingFast => 5,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DecreasingFast => "Decreasing fast",
            Self::Decreasing => "Decreasing",
            Self::Stable => "Stable",
            Self::Increasing => "Increasing",
            Self::IncreasingFast => "Increasing fast",
        }
    }

    /// Material Design icon name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::DecreasingFast => "mdi:arrow-down-bold-box",
            Self::Decreasing => "mdi:arrow-bottom-right-bold-box",
            Self::Stable => "mdi:arrow-right-bold-box",
            Self::Increasing => "mdi:arrow-top-right-bold-box",
            Self::IncreasingFast => "mdi:arrow-up-bold-box",
        }
    }
}
