// src/application.rs

use crate::columns::CanonicalColumn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain category that decides which columns a well dataset must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    Geothermal,
    Contamination,
    Groundwater,
    Hydrocarbon,
    Unknown,
}

impl Application {
    pub const VALID: [Application; 4] = [
        Self::Geothermal,
        Self::Contamination,
        Self::Groundwater,
        Self::Hydrocarbon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Geothermal => "geothermal",
            Self::Contamination => "contamination",
            Self::Groundwater => "groundwater",
            Self::Hydrocarbon => "hydrocarbon",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::VALID.into_iter().find(|app| app.as_str() == label)
    }

    pub fn is_valid(self) -> bool {
        self != Self::Unknown
    }

    /// Columns that must be present for the analysis, in reporting order.
    pub fn required_columns(self) -> &'static [CanonicalColumn] {
        use CanonicalColumn::*;
        match self {
            Self::Geothermal => &[Depth, Temperature],
            Self::Contamination | Self::Groundwater | Self::Hydrocarbon => {
                &[Depth, Porosity, Permeability]
            }
            Self::Unknown => &[],
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller's request for an application label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationChoice {
    Auto,
    Named(String),
}

impl ApplicationChoice {
    /// `None` and `"auto"` mean detect from the columns; any other text is
    /// taken verbatim and validated later.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("auto") => Self::Auto,
            Some(label) => Self::Named(label.to_string()),
        }
    }
}

/// Guess the application from the column names present in the table.
///
/// Runs against the renamed column set, so the `aquifer` test only fires for an
/// unmapped original header; no canonical name contains it.
pub fn detect_application<S: AsRef<str>>(columns: &[S]) -> Application {
    let lowered: Vec<String> = columns
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect();
    let any = |needles: &[&str]| {
        lowered
            .iter()
            .any(|col| needles.iter().any(|n| col.contains(n)))
    };

    if any(&["temperature"]) {
        Application::Geothermal
    } else if any(&["contaminant", "risk"]) {
        Application::Contamination
    } else if any(&["hydraulic", "aquifer"]) {
        Application::Groundwater
    } else if any(&["porosity"]) && any(&["permeability"]) {
        Application::Hydrocarbon
    } else {
        Application::Unknown
    }
}
