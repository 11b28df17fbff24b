use serde::{Deserialize, Serialize};
use std::fmt;

/// Neutropenia severity derived from an absolute neutrophil count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeutropeniaSeverity {
    Severe,
    Moderate,
    Mild,
    Normal,
}

impl NeutropeniaSeverity {
    /// Thresholds in cells/µL: below 500, 1000 and 1500.
    pub fn from_anc(cells_per_ul: f64) -> Self {
        if cells_per_ul < 500.0 {
            NeutropeniaSeverity::Severe
        } else if cells_per_ul < 1000.0 {
            NeutropeniaSeverity::Moderate
        } else if cells_per_ul < 1500.0 {
            NeutropeniaSeverity::Mild
        } else {
            NeutropeniaSeverity::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NeutropeniaSeverity::Severe => "Severe Neutropenia",
            NeutropeniaSeverity::Moderate => "Moderate Neutropenia",
            NeutropeniaSeverity::Mild => "Mild Neutropenia",
            NeutropeniaSeverity::Normal => "Normal",
        }
    }
}

impl fmt::Display for NeutropeniaSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Absolute neutrophil count in cells/µL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsoluteNeutrophilCount {
    pub cells_per_ul: f64,
    pub severity: NeutropeniaSeverity,
}

impl fmt::Display for AbsoluteNeutrophilCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} cells/µL ({})", self.cells_per_ul, self.severity)
    }
}
