//! Catalog of available calculators, grouped the way the calculator page
//! presents them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Calculator page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CalculatorCategory {
    Dosing,
    RenalHepatic,
    Hematology,
    Staging,
    Toxicity,
    Cardiac,
}

impl CalculatorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorCategory::Dosing => "Dosing & Metrics",
            CalculatorCategory::RenalHepatic => "Renal & Hepatic",
            CalculatorCategory::Hematology => "Hematology",
            CalculatorCategory::Staging => "Staging Tools",
            CalculatorCategory::Toxicity => "Toxicity Grading",
            CalculatorCategory::Cardiac => "Cardiac Safety",
        }
    }
}

impl fmt::Display for CalculatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every calculator and classifier offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    Bsa,
    Bmi,
    Calvert,
    Ecog,
    Crcl,
    ChildPugh,
    Anc,
    Stage,
    Toxicity,
    Qtc,
}

impl CalculatorKind {
    /// Catalog order, grouped by category.
    pub const ALL: [CalculatorKind; 10] = [
        CalculatorKind::Bsa,
        CalculatorKind::Bmi,
        CalculatorKind::Calvert,
        CalculatorKind::Ecog,
        CalculatorKind::Crcl,
        CalculatorKind::ChildPugh,
        CalculatorKind::Anc,
        CalculatorKind::Stage,
        CalculatorKind::Toxicity,
        CalculatorKind::Qtc,
    ];

    /// Stable identifier, also used as the CLI subcommand name.
    pub fn id(&self) -> &'static str {
        match self {
            CalculatorKind::Bsa => "bsa",
            CalculatorKind::Bmi => "bmi",
            CalculatorKind::Calvert => "calvert",
            CalculatorKind::Ecog => "ecog",
            CalculatorKind::Crcl => "crcl",
            CalculatorKind::ChildPugh => "child-pugh",
            CalculatorKind::Anc => "anc",
            CalculatorKind::Stage => "stage",
            CalculatorKind::Toxicity => "toxicity",
            CalculatorKind::Qtc => "qtc",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::Bsa => "BSA Calculator (Mosteller)",
            CalculatorKind::Bmi => "BMI Calculator",
            CalculatorKind::Calvert => "Carboplatin Dose (Calvert)",
            CalculatorKind::Ecog => "ECOG Performance Status",
            CalculatorKind::Crcl => "Creatinine Clearance (Cockcroft-Gault)",
            CalculatorKind::ChildPugh => "Child-Pugh Score",
            CalculatorKind::Anc => "Absolute Neutrophil Count",
            CalculatorKind::Stage => "AJCC TNM Staging",
            CalculatorKind::Toxicity => "CTCAE Toxicity Grader",
            CalculatorKind::Qtc => "QTc Calculator (Bazett)",
        }
    }

    pub fn category(&self) -> CalculatorCategory {
        match self {
            CalculatorKind::Bsa
            | CalculatorKind::Bmi
            | CalculatorKind::Calvert
            | CalculatorKind::Ecog => CalculatorCategory::Dosing,
            CalculatorKind::Crcl | CalculatorKind::ChildPugh => CalculatorCategory::RenalHepatic,
            CalculatorKind::Anc => CalculatorCategory::Hematology,
            CalculatorKind::Stage => CalculatorCategory::Staging,
            CalculatorKind::Toxicity => CalculatorCategory::Toxicity,
            CalculatorKind::Qtc => CalculatorCategory::Cardiac,
        }
    }

    /// Calculators in one category, in catalog order.
    pub fn in_category(category: CalculatorCategory) -> Vec<CalculatorKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| kind.category() == category)
            .collect()
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for CalculatorKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == needle)
            .ok_or_else(|| InputError::UnknownChoice {
                field: "calculator",
                value: s.to_string(),
                expected: "bsa, bmi, calvert, ecog, crcl, child-pugh, anc, stage, toxicity, qtc",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in CalculatorKind::ALL {
            assert_eq!(kind.id().parse::<CalculatorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_renal_hepatic_section() {
        assert_eq!(
            CalculatorKind::in_category(CalculatorCategory::RenalHepatic),
            vec![CalculatorKind::Crcl, CalculatorKind::ChildPugh]
        );
    }
}
