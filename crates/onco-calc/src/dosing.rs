//! Carboplatin dosing by the Calvert formula.
//!
//! The supplied GFR is used as-is unless the caller opts into a cap through
//! [`CalculationOptions::gfr_cap`]. Many institutions limit GFR to 125 mL/min;
//! that is a policy choice made by the caller, not part of the formula.

use onco_model::{CalculationOptions, CarboplatinDose, GfrCapPolicy, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::validate::{parse_positive, positive, positive_result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalvertInput {
    pub target_auc: f64,
    /// GFR or creatinine clearance in mL/min.
    pub gfr_ml_min: f64,
}

impl CalvertInput {
    pub fn parse(target_auc: &str, gfr_ml_min: &str) -> Result<Self> {
        Ok(Self {
            target_auc: parse_positive("target_auc", target_auc)?,
            gfr_ml_min: parse_positive("gfr", gfr_ml_min)?,
        })
    }
}

/// `dose_mg = target_AUC × (GFR + 25)`.
///
/// A cap limit that is not a finite number above zero gives no result.
pub fn calvert_dose(input: &CalvertInput, options: &CalculationOptions) -> Option<CarboplatinDose> {
    let target_auc = positive("calvert", "target_auc", input.target_auc)?;
    let gfr = positive("calvert", "gfr", input.gfr_ml_min)?;
    if let GfrCapPolicy::CapAt(limit) = options.gfr_cap {
        positive("calvert", "gfr_cap", limit)?;
    }
    let (gfr_used, gfr_capped) = options.gfr_cap.apply(gfr);
    if gfr_capped {
        debug!(gfr_used, "GFR capped by policy");
    }
    let milligrams = positive_result("calvert", target_auc * (gfr_used + 25.0))?;
    trace!(milligrams, "computed carboplatin dose");
    Some(CarboplatinDose {
        milligrams,
        target_auc,
        gfr_used,
        gfr_capped,
    })
}
