//! Lookup-only scales: CTCAE toxicity grade and ECOG performance status.

use onco_model::{CtcaeGrade, EcogStatus, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validate::parse_level;

/// Selected grade on a lookup scale; `None` until the user picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GradeSelection {
    pub level: Option<u8>,
}

impl GradeSelection {
    pub fn new(level: u8) -> Self {
        Self { level: Some(level) }
    }

    /// Parse a CTCAE grade selection (1 to 5).
    pub fn parse_ctcae(raw: &str) -> Result<Self> {
        parse_level("grade", raw, 1, 5).map(Self::new)
    }

    /// Parse an ECOG selection (0 to 5).
    pub fn parse_ecog(raw: &str) -> Result<Self> {
        parse_level("grade", raw, 0, 5).map(Self::new)
    }
}

pub fn ctcae_grade(level: u8) -> Option<CtcaeGrade> {
    let grade = CtcaeGrade::ALL.into_iter().find(|g| g.level() == level);
    if grade.is_none() {
        debug!(calculator = "toxicity", level, "no CTCAE grade for level");
    }
    grade
}

pub fn ecog_status(level: u8) -> Option<EcogStatus> {
    let status = EcogStatus::ALL.into_iter().find(|s| s.level() == level);
    if status.is_none() {
        debug!(calculator = "ecog", level, "no ECOG status for level");
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctcae_lookup() {
        assert_eq!(ctcae_grade(0), None);
        assert_eq!(ctcae_grade(3), Some(CtcaeGrade::Severe));
        assert_eq!(ctcae_grade(6), None);
    }

    #[test]
    fn test_ecog_lookup() {
        assert_eq!(ecog_status(0), Some(EcogStatus::FullyActive));
        assert_eq!(ecog_status(5), Some(EcogStatus::Dead));
        assert_eq!(ecog_status(6), None);
    }

    #[test]
    fn test_parse_ranges_differ() {
        assert!(GradeSelection::parse_ctcae("0").is_err());
        assert_eq!(GradeSelection::parse_ecog("0").unwrap().level, Some(0));
    }
}
