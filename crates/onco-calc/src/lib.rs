//! Clinical formula engine.
//!
//! Each calculation is a pure function over a typed input struct and returns
//! `None` when the input is outside its valid domain. Raw form text is turned
//! into those structs by the `parse` constructors, which report why a value
//! was rejected.
//!
//! | Module | Calculations |
//! |--------|--------------|
//! | [`anthropometric`] | BSA (Mosteller), BMI |
//! | [`hematology`] | Absolute neutrophil count |
//! | [`dosing`] | Carboplatin dose (Calvert) |
//! | [`renal`] | Creatinine clearance (Cockcroft-Gault) |
//! | [`hepatic`] | Child-Pugh score |
//! | [`cardiac`] | QTc (Bazett) |
//! | [`staging`] | Simplified AJCC TNM stage |
//! | [`grading`] | CTCAE grade, ECOG performance status |

pub mod anthropometric;
pub mod calculator;
pub mod cardiac;
pub mod dosing;
pub mod grading;
pub mod hematology;
pub mod hepatic;
pub mod renal;
pub mod staging;
pub mod validate;

pub use anthropometric::{BmiInput, BsaInput, body_mass_index, body_surface_area};
pub use calculator::{
    Anc, Bazett, Bmi, Calculator, Calvert, ChildPugh, CockcroftGault, Mosteller,
    PerformanceStatus, TnmStaging, ToxicityGrader,
};
pub use cardiac::{QtcInput, corrected_qt};
pub use dosing::{CalvertInput, calvert_dose};
pub use grading::{GradeSelection, ctcae_grade, ecog_status};
pub use hematology::{AncInput, absolute_neutrophil_count};
pub use hepatic::{ChildPughInput, albumin_points, bilirubin_points, child_pugh, inr_points};
pub use renal::{CrClInput, creatinine_clearance};
pub use staging::{STAGING_RULES, StagingRule, Tnm, TnmSelection, matching_rule, stage_tnm};
