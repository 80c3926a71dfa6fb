//! LibreLinkUp regional API endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LibreError;

/// Regional deployment of the LibreLinkUp API.
///
/// Accounts are bound to one region; logging in against the wrong one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    /// Global endpoint.
    #[default]
    #[serde(rename = "Global")]
    Global,
    /// United Arab Emirates.
    #[serde(rename = "Arab Emirates")]
    ArabEmirates,
    /// Asia Pacific.
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,
    /// Australia.
    #[serde(rename = "Australia")]
    Australia,
    /// Canada.
    #[serde(rename = "Canada")]
    Canada,
    /// Germany.
    #[serde(rename = "Germany")]
    Germany,
    /// Europe.
    #[serde(rename = "Europe")]
    Europe,
    /// France.
    #[serde(rename = "France")]
    France,
    /// Japan.
    #[serde(rename = "Japan")]
    Japan,
    /// Russia.
    #[serde(rename = "Russia")]
    Russia,
    /// United States.
    #[serde(rename = "United States")]
    UnitedStates,
}

impl Region {
    /// All regions in the order they are offered to the operator.
    pub const ALL: [Self; 11] = [
        Self::Global,
        Self::ArabEmirates,
        Self::AsiaPacific,
        Self::Australia,
        Self::Canada,
        Self::Germany,
        Self::Europe,
        Self::France,
        Self::Japan,
        Self::Russia,
        Self::UnitedStates,
    ];

    /// Human-readable region name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::ArabEmirates => "Arab Emirates",
            Self::AsiaPacific => "Asia Pacific",
            Self::Australia => "Australia",
            Self::Canada => "Canada",
            Self::Germany => "Germany",
            Self::Europe => "Europe",
            Self::France => "France",
            Self::Japan => "Japan",
            Self::Russia => "Russia",
            Self::UnitedStates => "United States",
        }
    }

    /// Base URL of the regional API, without a trailing slash.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Global => "https://api.libreview.io",
            Self::ArabEmirates => "https://api-ae.libreview.io",
            Self::AsiaPacific => "https://api-ap.libreview.io",
            Self::Australia => "https://api-au.libreview.io",
            Self::Canada => "https://api-ca.libreview.io",
            Self::Germany => "https://api-de.libreview.io",
            Self::Europe => "https://api-eu.libreview.io",
            Self::France => "https://api-fr.libreview.io",
            Self::Japan => "https://api-jp.libreview.io",
            Self::Russia => "https://api.libreview.ru",
            Self::UnitedStates => "https://api-us.libreview.io",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = LibreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| LibreError::InvalidArg(format!("unknown region: {s}")))
    }
}
