//! Categorical calculator inputs.
//!
//! Each enum parses case-insensitively from the codes and labels used on the
//! calculator forms, so `"Slight / Controlled"`, `"slight"` and the form's
//! point value `"2"` all select [`Ascites::Slight`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Uppercase and drop separators so `"Grade 1-2"` and `"grade1_2"` compare equal.
fn normalize_choice(s: &str) -> String {
    s.trim()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Biological sex as used by the Cockcroft-Gault equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    /// Multiplier applied to the Cockcroft-Gault estimate.
    pub fn clearance_factor(&self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 0.85,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            _ => Err(InputError::UnknownChoice {
                field: "sex",
                value: s.to_string(),
                expected: "male, female",
            }),
        }
    }
}

/// Ascites finding for the Child-Pugh score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ascites {
    /// None.
    Absent,
    /// Slight, or controlled with diuretics.
    Slight,
    /// Moderate to severe.
    Moderate,
}

impl Ascites {
    pub const ALL: [Ascites; 3] = [Ascites::Absent, Ascites::Slight, Ascites::Moderate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ascites::Absent => "None",
            Ascites::Slight => "Slight / Controlled",
            Ascites::Moderate => "Moderate / Severe",
        }
    }

    /// Child-Pugh points contributed by this finding.
    pub fn points(&self) -> u8 {
        match self {
            Ascites::Absent => 1,
            Ascites::Slight => 2,
            Ascites::Moderate => 3,
        }
    }
}

impl fmt::Display for Ascites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ascites {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "1" | "NONE" | "ABSENT" => Ok(Ascites::Absent),
            "2" | "SLIGHT" | "CONTROLLED" | "SLIGHTCONTROLLED" | "MILD" => Ok(Ascites::Slight),
            "3" | "MODERATE" | "SEVERE" | "MODERATESEVERE" => Ok(Ascites::Moderate),
            _ => Err(InputError::UnknownChoice {
                field: "ascites",
                value: s.to_string(),
                expected: "none, slight, moderate",
            }),
        }
    }
}

/// Hepatic encephalopathy grade for the Child-Pugh score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encephalopathy {
    Absent,
    Grade1To2,
    Grade3To4,
}

impl Encephalopathy {
    pub const ALL: [Encephalopathy; 3] = [
        Encephalopathy::Absent,
        Encephalopathy::Grade1To2,
        Encephalopathy::Grade3To4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Encephalopathy::Absent => "None",
            Encephalopathy::Grade1To2 => "Grade 1-2",
            Encephalopathy::Grade3To4 => "Grade 3-4",
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            Encephalopathy::Absent => 1,
            Encephalopathy::Grade1To2 => 2,
            Encephalopathy::Grade3To4 => 3,
        }
    }
}

impl fmt::Display for Encephalopathy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Encephalopathy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "1" | "NONE" | "ABSENT" => Ok(Encephalopathy::Absent),
            "2" | "GRADE12" | "12" | "MILD" => Ok(Encephalopathy::Grade1To2),
            "3" | "GRADE34" | "34" | "SEVERE" => Ok(Encephalopathy::Grade3To4),
            _ => Err(InputError::UnknownChoice {
                field: "encephalopathy",
                value: s.to_string(),
                expected: "none, grade1-2, grade3-4",
            }),
        }
    }
}

/// Primary tumor (T) category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TumorCategory {
    T1,
    T2,
    T3,
    T4,
}

impl TumorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TumorCategory::T1 => "T1",
            TumorCategory::T2 => "T2",
            TumorCategory::T3 => "T3",
            TumorCategory::T4 => "T4",
        }
    }
}

impl fmt::Display for TumorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TumorCategory {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalize_choice(s);
        match code.strip_prefix('T').unwrap_or(code.as_str()) {
            "1" => Ok(TumorCategory::T1),
            "2" => Ok(TumorCategory::T2),
            "3" => Ok(TumorCategory::T3),
            "4" => Ok(TumorCategory::T4),
            _ => Err(InputError::UnknownChoice {
                field: "tumor",
                value: s.to_string(),
                expected: "T1, T2, T3, T4",
            }),
        }
    }
}

/// Regional lymph node (N) category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeCategory {
    N0,
    N1,
    N2,
    N3,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::N0 => "N0",
            NodeCategory::N1 => "N1",
            NodeCategory::N2 => "N2",
            NodeCategory::N3 => "N3",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeCategory {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalize_choice(s);
        match code.strip_prefix('N').unwrap_or(code.as_str()) {
            "0" => Ok(NodeCategory::N0),
            "1" => Ok(NodeCategory::N1),
            "2" => Ok(NodeCategory::N2),
            "3" => Ok(NodeCategory::N3),
            _ => Err(InputError::UnknownChoice {
                field: "node",
                value: s.to_string(),
                expected: "N0, N1, N2, N3",
            }),
        }
    }
}

/// Distant metastasis (M) category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetastasisCategory {
    M0,
    M1,
}

impl MetastasisCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetastasisCategory::M0 => "M0",
            MetastasisCategory::M1 => "M1",
        }
    }
}

impl fmt::Display for MetastasisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetastasisCategory {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalize_choice(s);
        match code.strip_prefix('M').unwrap_or(code.as_str()) {
            "0" => Ok(MetastasisCategory::M0),
            "1" => Ok(MetastasisCategory::M1),
            _ => Err(InputError::UnknownChoice {
                field: "metastasis",
                value: s.to_string(),
                expected: "M0, M1",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascites_from_form_labels() {
        assert_eq!("None".parse::<Ascites>().unwrap(), Ascites::Absent);
        assert_eq!(
            "Slight / Controlled".parse::<Ascites>().unwrap(),
            Ascites::Slight
        );
        assert_eq!("3".parse::<Ascites>().unwrap(), Ascites::Moderate);
        assert!("massive".parse::<Ascites>().is_err());
    }

    #[test]
    fn test_encephalopathy_from_str() {
        assert_eq!(
            "grade1-2".parse::<Encephalopathy>().unwrap(),
            Encephalopathy::Grade1To2
        );
        assert_eq!(
            "Grade 3-4".parse::<Encephalopathy>().unwrap(),
            Encephalopathy::Grade3To4
        );
    }

    #[test]
    fn test_tnm_categories_accept_bare_digits() {
        assert_eq!("t3".parse::<TumorCategory>().unwrap(), TumorCategory::T3);
        assert_eq!("2".parse::<NodeCategory>().unwrap(), NodeCategory::N2);
        assert_eq!(
            "M1".parse::<MetastasisCategory>().unwrap(),
            MetastasisCategory::M1
        );
        assert!("T5".parse::<TumorCategory>().is_err());
        assert!("TT1".parse::<TumorCategory>().is_err());
        assert!("NN0".parse::<NodeCategory>().is_err());
        assert!("MM1".parse::<MetastasisCategory>().is_err());
        assert!("".parse::<MetastasisCategory>().is_err());
    }

    #[test]
    fn test_sex_factor() {
        assert_eq!("female".parse::<Sex>().unwrap().clearance_factor(), 0.85);
        assert_eq!(Sex::Male.clearance_factor(), 1.0);
    }

    #[test]
    fn test_points_cover_one_to_three() {
        let ascites: Vec<u8> = Ascites::ALL.iter().map(Ascites::points).collect();
        let enceph: Vec<u8> = Encephalopathy::ALL
            .iter()
            .map(Encephalopathy::points)
            .collect();
        assert_eq!(ascites, vec![1, 2, 3]);
        assert_eq!(enceph, vec![1, 2, 3]);
    }
}
