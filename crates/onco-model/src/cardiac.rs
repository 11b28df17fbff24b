use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrhythmia risk band for a corrected QT interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QtcRisk {
    Normal,
    Borderline,
    HighRisk,
}

impl QtcRisk {
    /// Above 500 ms is high risk, above 450 ms borderline.
    pub fn from_qtc(qtc_ms: f64) -> Self {
        if qtc_ms > 500.0 {
            QtcRisk::HighRisk
        } else if qtc_ms > 450.0 {
            QtcRisk::Borderline
        } else {
            QtcRisk::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QtcRisk::Normal => "Normal",
            QtcRisk::Borderline => "Borderline",
            QtcRisk::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for QtcRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Heart-rate-corrected QT interval (Bazett).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectedQt {
    pub milliseconds: f64,
    /// RR interval in seconds.
    pub rr_seconds: f64,
    pub risk: QtcRisk,
}

impl fmt::Display for CorrectedQt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} ms ({})", self.milliseconds, self.risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_band_edges() {
        assert_eq!(QtcRisk::from_qtc(450.0), QtcRisk::Normal);
        assert_eq!(QtcRisk::from_qtc(450.1), QtcRisk::Borderline);
        assert_eq!(QtcRisk::from_qtc(500.0), QtcRisk::Borderline);
        assert_eq!(QtcRisk::from_qtc(500.1), QtcRisk::HighRisk);
    }
}
