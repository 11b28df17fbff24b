//! QT interval correction by Bazett's formula.

use onco_model::{CorrectedQt, QtcRisk, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::validate::{parse_positive, positive, positive_result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QtcInput {
    pub qt_ms: f64,
    pub heart_rate_bpm: f64,
}

impl QtcInput {
    pub fn parse(qt_ms: &str, heart_rate_bpm: &str) -> Result<Self> {
        Ok(Self {
            qt_ms: parse_positive("qt_ms", qt_ms)?,
            heart_rate_bpm: parse_positive("heart_rate_bpm", heart_rate_bpm)?,
        })
    }
}

/// `RR = 60 / HR`, `QTc = QT / sqrt(RR)`.
pub fn corrected_qt(input: &QtcInput) -> Option<CorrectedQt> {
    let qt = positive("qtc", "qt_ms", input.qt_ms)?;
    let heart_rate = positive("qtc", "heart_rate_bpm", input.heart_rate_bpm)?;
    let rr_seconds = positive_result("qtc", 60.0 / heart_rate)?;
    let milliseconds = positive_result("qtc", qt / rr_seconds.sqrt())?;
    trace!(milliseconds, rr_seconds, "computed corrected QT");
    Some(CorrectedQt {
        milliseconds,
        rr_seconds,
        risk: QtcRisk::from_qtc(milliseconds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_rate_60_leaves_qt_unchanged() {
        let qtc = corrected_qt(&QtcInput {
            qt_ms: 420.0,
            heart_rate_bpm: 60.0,
        })
        .unwrap();
        assert_eq!(qtc.rr_seconds, 1.0);
        assert_eq!(qtc.milliseconds, 420.0);
    }

    #[test]
    fn test_subnormal_heart_rate_gives_no_result() {
        let input = QtcInput::parse("400", "1e-320").unwrap();
        assert!(corrected_qt(&input).is_none());
    }
}
