//! Child-Pugh liver function classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Child-Pugh class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChildPughClass {
    A,
    B,
    C,
}

impl ChildPughClass {
    /// Class for a total score: up to 6 is A, up to 9 is B, otherwise C.
    pub fn from_score(score: u8) -> Self {
        if score <= 6 {
            ChildPughClass::A
        } else if score <= 9 {
            ChildPughClass::B
        } else {
            ChildPughClass::C
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChildPughClass::A => "A",
            ChildPughClass::B => "B",
            ChildPughClass::C => "C",
        }
    }

    /// Reference one-year survival for the class.
    pub fn one_year_survival(&self) -> &'static str {
        match self {
            ChildPughClass::A => "100% (1yr)",
            ChildPughClass::B => "80% (1yr)",
            ChildPughClass::C => "45% (1yr)",
        }
    }
}

impl fmt::Display for ChildPughClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Child-Pugh score with the points contributed by each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildPughScore {
    pub bilirubin_points: u8,
    pub albumin_points: u8,
    pub inr_points: u8,
    pub ascites_points: u8,
    pub encephalopathy_points: u8,
    /// Sum of the five components, 5 to 15.
    pub total: u8,
    pub class: ChildPughClass,
}

impl ChildPughScore {
    /// Assemble a score from its component points.
    ///
    /// Each component is expected to be 1 to 3. The total saturates at
    /// `u8::MAX` for larger values.
    pub fn from_points(
        bilirubin_points: u8,
        albumin_points: u8,
        inr_points: u8,
        ascites_points: u8,
        encephalopathy_points: u8,
    ) -> Self {
        let total = [albumin_points, inr_points, ascites_points, encephalopathy_points]
            .into_iter()
            .fold(bilirubin_points, u8::saturating_add);
        Self {
            bilirubin_points,
            albumin_points,
            inr_points,
            ascites_points,
            encephalopathy_points,
            total,
            class: ChildPughClass::from_score(total),
        }
    }

    pub fn one_year_survival(&self) -> &'static str {
        self.class.one_year_survival()
    }
}

impl fmt::Display for ChildPughScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Class {} (score {}, survival {})",
            self.class,
            self.total,
            self.one_year_survival()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_edges() {
        assert_eq!(ChildPughClass::from_score(5), ChildPughClass::A);
        assert_eq!(ChildPughClass::from_score(6), ChildPughClass::A);
        assert_eq!(ChildPughClass::from_score(7), ChildPughClass::B);
        assert_eq!(ChildPughClass::from_score(9), ChildPughClass::B);
        assert_eq!(ChildPughClass::from_score(10), ChildPughClass::C);
        assert_eq!(ChildPughClass::from_score(15), ChildPughClass::C);
    }

    #[test]
    fn test_score_sums_components() {
        let score = ChildPughScore::from_points(2, 1, 2, 1, 1);
        assert_eq!(score.total, 7);
        assert_eq!(score.class, ChildPughClass::B);
        assert_eq!(score.one_year_survival(), "80% (1yr)");
    }

    #[test]
    fn test_out_of_range_points_saturate() {
        let score = ChildPughScore::from_points(200, 200, 3, 3, 3);
        assert_eq!(score.total, u8::MAX);
        assert_eq!(score.class, ChildPughClass::C);
    }
}
