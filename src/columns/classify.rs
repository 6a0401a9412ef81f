// src/columns/classify.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A semantic field the loader normalizes column names toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalColumn {
    Depth,
    Porosity,
    Permeability,
    Lithology,
    Temperature,
    HydraulicConductivity,
    ContaminantRisk,
}

impl CanonicalColumn {
    pub const ALL: [CanonicalColumn; 7] = [
        Self::Depth,
        Self::Porosity,
        Self::Permeability,
        Self::Lithology,
        Self::Temperature,
        Self::HydraulicConductivity,
        Self::ContaminantRisk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Depth => "depth",
            Self::Porosity => "porosity",
            Self::Permeability => "permeability",
            Self::Lithology => "lithology",
            Self::Temperature => "temperature",
            Self::HydraulicConductivity => "hydraulic_conductivity",
            Self::ContaminantRisk => "contaminant_risk",
        }
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify one column header by case-insensitive substring rules.
///
/// Rules are tried in a fixed order and the first hit wins, so a header such as
/// `depth_porosity` is a depth column.
pub fn classify_column(name: &str) -> Option<CanonicalColumn> {
    let lower = name.trim().to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    if has("depth") {
        Some(CanonicalColumn::Depth)
    } else if has("poro") {
        Some(CanonicalColumn::Porosity)
    } else if has("perm") {
        Some(CanonicalColumn::Permeability)
    } else if has("lith") || has("rock") {
        Some(CanonicalColumn::Lithology)
    } else if has("temp") {
        Some(CanonicalColumn::Temperature)
    } else if has("hydraulic") && has("conductivity") {
        Some(CanonicalColumn::HydraulicConductivity)
    } else if has("contaminant") || has("risk") {
        Some(CanonicalColumn::ContaminantRisk)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rule_headers() {
        let cases = [
            ("Depth_ft", CanonicalColumn::Depth),
            ("Porosity_frac", CanonicalColumn::Porosity),
            ("PERM (mD)", CanonicalColumn::Permeability),
            ("Rock Type", CanonicalColumn::Lithology),
            ("  Lithology  ", CanonicalColumn::Lithology),
            ("Temp_F", CanonicalColumn::Temperature),
            ("Hydraulic Conductivity", CanonicalColumn::HydraulicConductivity),
            ("Contaminant_ppm", CanonicalColumn::ContaminantRisk),
            ("risk_score", CanonicalColumn::ContaminantRisk),
        ];
        for (header, expected) in cases {
            assert_eq!(classify_column(header), Some(expected), "header {header:?}");
        }
    }

    #[test]
    fn earlier_rule_takes_priority() {
        assert_eq!(classify_column("depth_poro"), Some(CanonicalColumn::Depth));
        assert_eq!(classify_column("poro_perm"), Some(CanonicalColumn::Porosity));
        // "temp" only reaches rule 5 if nothing earlier matched
        assert_eq!(classify_column("rock_temp"), Some(CanonicalColumn::Lithology));
        assert_eq!(
            classify_column("hydraulic_conductivity_risk"),
            Some(CanonicalColumn::HydraulicConductivity)
        );
    }

    #[test]
    fn unmatched_headers() {
        assert_eq!(classify_column("Well_ID"), None);
        assert_eq!(classify_column("Notes"), None);
        // needs both words
        assert_eq!(classify_column("hydraulic_head"), None);
        assert_eq!(classify_column("Aquifer"), None);
    }

    #[test]
    fn canonical_names_classify_to_themselves() {
        for canonical in CanonicalColumn::ALL {
            assert_eq!(classify_column(canonical.as_str()), Some(canonical));
        }
    }
}
