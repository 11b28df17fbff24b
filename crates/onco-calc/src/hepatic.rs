//! Child-Pugh score.
//!
//! Bucket edges: bilirubin `<2 / ≤3 / >3` mg/dL, albumin `>3.5 / ≥2.8 / <2.8`
//! g/dL, INR `<1.7 / ≤2.3 / >2.3`. An exact 3 mg/dL bilirubin and an exact
//! 2.3 INR both score 2.

use onco_model::{Ascites, ChildPughScore, Encephalopathy, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::validate::{parse_choice, parse_positive, positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildPughInput {
    pub bilirubin_mg_dl: f64,
    pub albumin_g_dl: f64,
    pub inr: f64,
    pub ascites: Ascites,
    pub encephalopathy: Encephalopathy,
}

impl ChildPughInput {
    pub fn parse(
        bilirubin_mg_dl: &str,
        albumin_g_dl: &str,
        inr: &str,
        ascites: &str,
        encephalopathy: &str,
    ) -> Result<Self> {
        Ok(Self {
            bilirubin_mg_dl: parse_positive("bilirubin_mg_dl", bilirubin_mg_dl)?,
            albumin_g_dl: parse_positive("albumin_g_dl", albumin_g_dl)?,
            inr: parse_positive("inr", inr)?,
            ascites: parse_choice("ascites", ascites)?,
            encephalopathy: parse_choice("encephalopathy", encephalopathy)?,
        })
    }
}

pub fn bilirubin_points(bilirubin_mg_dl: f64) -> u8 {
    if bilirubin_mg_dl < 2.0 {
        1
    } else if bilirubin_mg_dl <= 3.0 {
        2
    } else {
        3
    }
}

pub fn albumin_points(albumin_g_dl: f64) -> u8 {
    if albumin_g_dl > 3.5 {
        1
    } else if albumin_g_dl >= 2.8 {
        2
    } else {
        3
    }
}

pub fn inr_points(inr: f64) -> u8 {
    if inr < 1.7 {
        1
    } else if inr <= 2.3 {
        2
    } else {
        3
    }
}

/// Total Child-Pugh score (5 to 15) and class.
///
/// Lab values must be finite and above zero; otherwise there is no score.
pub fn child_pugh(input: &ChildPughInput) -> Option<ChildPughScore> {
    let bilirubin = positive("child_pugh", "bilirubin_mg_dl", input.bilirubin_mg_dl)?;
    let albumin = positive("child_pugh", "albumin_g_dl", input.albumin_g_dl)?;
    let inr = positive("child_pugh", "inr", input.inr)?;
    let score = ChildPughScore::from_points(
        bilirubin_points(bilirubin),
        albumin_points(albumin),
        inr_points(inr),
        input.ascites.points(),
        input.encephalopathy.points(),
    );
    trace!(total = score.total, class = %score.class, "computed Child-Pugh score");
    Some(score)
}
