//! Creatinine clearance by Cockcroft-Gault.

use onco_model::{CreatinineClearance, Result, Sex};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::validate::{parse_choice, parse_positive, positive, positive_result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrClInput {
    pub age_years: f64,
    pub weight_kg: f64,
    pub creatinine_mg_dl: f64,
    pub sex: Sex,
}

impl CrClInput {
    pub fn parse(age_years: &str, weight_kg: &str, creatinine_mg_dl: &str, sex: &str) -> Result<Self> {
        Ok(Self {
            age_years: parse_positive("age_years", age_years)?,
            weight_kg: parse_positive("weight_kg", weight_kg)?,
            creatinine_mg_dl: parse_positive("creatinine_mg_dl", creatinine_mg_dl)?,
            sex: parse_choice("sex", sex)?,
        })
    }
}

/// `((140 - age) × weight) / (72 × creatinine)`, × 0.85 for female patients.
///
/// Ages of 140 and above give a non-positive estimate and produce no result.
pub fn creatinine_clearance(input: &CrClInput) -> Option<CreatinineClearance> {
    let age = positive("crcl", "age_years", input.age_years)?;
    let weight = positive("crcl", "weight_kg", input.weight_kg)?;
    let creatinine = positive("crcl", "creatinine_mg_dl", input.creatinine_mg_dl)?;
    let estimate = ((140.0 - age) * weight) / (72.0 * creatinine) * input.sex.clearance_factor();
    let ml_per_min = positive_result("crcl", estimate)?;
    trace!(ml_per_min, "computed creatinine clearance");
    Some(CreatinineClearance {
        ml_per_min,
        sex: input.sex,
    })
}
