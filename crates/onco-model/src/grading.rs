//! Static grading scales: CTCAE adverse event grades and ECOG performance status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CTCAE adverse event grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CtcaeGrade {
    Mild,
    Moderate,
    Severe,
    LifeThreatening,
    Death,
}

impl CtcaeGrade {
    pub const ALL: [CtcaeGrade; 5] = [
        CtcaeGrade::Mild,
        CtcaeGrade::Moderate,
        CtcaeGrade::Severe,
        CtcaeGrade::LifeThreatening,
        CtcaeGrade::Death,
    ];

    /// Numeric grade, 1 through 5.
    pub fn level(&self) -> u8 {
        match self {
            CtcaeGrade::Mild => 1,
            CtcaeGrade::Moderate => 2,
            CtcaeGrade::Severe => 3,
            CtcaeGrade::LifeThreatening => 4,
            CtcaeGrade::Death => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CtcaeGrade::Mild => "Mild",
            CtcaeGrade::Moderate => "Moderate",
            CtcaeGrade::Severe => "Severe",
            CtcaeGrade::LifeThreatening => "Life-threatening",
            CtcaeGrade::Death => "Death",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CtcaeGrade::Mild => {
                "Asymptomatic or mild symptoms; clinical or diagnostic observations only; intervention not indicated."
            }
            CtcaeGrade::Moderate => {
                "Minimal, local or noninvasive intervention indicated; limiting age-appropriate instrumental ADL."
            }
            CtcaeGrade::Severe => {
                "Severe or medically significant but not immediately life-threatening; hospitalization or prolongation of hospitalization indicated."
            }
            CtcaeGrade::LifeThreatening => {
                "Life-threatening consequences; urgent intervention indicated."
            }
            CtcaeGrade::Death => "Death related to AE.",
        }
    }

    /// Grades 3 and above.
    pub fn is_high_grade(&self) -> bool {
        self.level() >= 3
    }
}

impl fmt::Display for CtcaeGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grade {} ({})", self.level(), self.label())
    }
}

/// ECOG performance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EcogStatus {
    FullyActive,
    Restricted,
    Ambulatory,
    LimitedSelfCare,
    CompletelyDisabled,
    Dead,
}

impl EcogStatus {
    pub const ALL: [EcogStatus; 6] = [
        EcogStatus::FullyActive,
        EcogStatus::Restricted,
        EcogStatus::Ambulatory,
        EcogStatus::LimitedSelfCare,
        EcogStatus::CompletelyDisabled,
        EcogStatus::Dead,
    ];

    /// Numeric grade, 0 through 5.
    pub fn level(&self) -> u8 {
        match self {
            EcogStatus::FullyActive => 0,
            EcogStatus::Restricted => 1,
            EcogStatus::Ambulatory => 2,
            EcogStatus::LimitedSelfCare => 3,
            EcogStatus::CompletelyDisabled => 4,
            EcogStatus::Dead => 5,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EcogStatus::FullyActive => {
                "Fully active, able to carry on all pre-disease performance without restriction."
            }
            EcogStatus::Restricted => {
                "Restricted in physically strenuous activity but ambulatory and able to carry out work of a light or sedentary nature."
            }
            EcogStatus::Ambulatory => {
                "Ambulatory and capable of all selfcare but unable to carry out any work activities; up and about more than 50% of waking hours."
            }
            EcogStatus::LimitedSelfCare => {
                "Capable of only limited selfcare; confined to bed or chair more than 50% of waking hours."
            }
            EcogStatus::CompletelyDisabled => {
                "Completely disabled; cannot carry on any selfcare; totally confined to bed or chair."
            }
            EcogStatus::Dead => "Dead.",
        }
    }
}

impl fmt::Display for EcogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ECOG {}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_contiguous() {
        let ctcae: Vec<u8> = CtcaeGrade::ALL.iter().map(CtcaeGrade::level).collect();
        assert_eq!(ctcae, vec![1, 2, 3, 4, 5]);
        let ecog: Vec<u8> = EcogStatus::ALL.iter().map(EcogStatus::level).collect();
        assert_eq!(ecog, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_high_grade_starts_at_three() {
        assert!(!CtcaeGrade::Moderate.is_high_grade());
        assert!(CtcaeGrade::Severe.is_high_grade());
        assert!(CtcaeGrade::Death.is_high_grade());
    }
}
