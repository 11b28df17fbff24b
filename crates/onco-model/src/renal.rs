//! Renal function and renally adjusted dosing results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Sex;

/// Estimated creatinine clearance in mL/min.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreatinineClearance {
    pub ml_per_min: f64,
    pub sex: Sex,
}

impl fmt::Display for CreatinineClearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mL/min", self.ml_per_min)
    }
}

/// Carboplatin dose from the Calvert formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarboplatinDose {
    pub milligrams: f64,
    pub target_auc: f64,
    /// GFR that entered the formula, after any cap policy.
    pub gfr_used: f64,
    /// True when the cap policy lowered the supplied GFR.
    pub gfr_capped: bool,
}

impl fmt::Display for CarboplatinDose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} mg", self.milligrams)
    }
}
