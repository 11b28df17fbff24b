use onco_model::{AbsoluteNeutrophilCount, NeutropeniaSeverity, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::validate::{
    non_negative, non_negative_result, parse_non_negative, parse_non_negative_or, parse_positive,
    positive,
};

/// Differential count for the absolute neutrophil count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AncInput {
    /// White cell count in ×10³/µL.
    pub wbc_thousands_per_ul: f64,
    pub neutrophil_percent: f64,
    /// Band forms; zero when not reported.
    pub band_percent: f64,
}

impl AncInput {
    /// Parse raw form fields. A missing or blank band percentage counts as 0.
    pub fn parse(wbc: &str, neutrophil_percent: &str, band_percent: Option<&str>) -> Result<Self> {
        Ok(Self {
            wbc_thousands_per_ul: parse_positive("wbc", wbc)?,
            neutrophil_percent: parse_non_negative("neutrophil_percent", neutrophil_percent)?,
            band_percent: parse_non_negative_or("band_percent", band_percent, 0.0)?,
        })
    }
}

/// `WBC × 1000 × (neutrophils% + bands%) / 100`, in cells/µL.
pub fn absolute_neutrophil_count(input: &AncInput) -> Option<AbsoluteNeutrophilCount> {
    let wbc = positive("anc", "wbc", input.wbc_thousands_per_ul)?;
    let neutrophils = non_negative("anc", "neutrophil_percent", input.neutrophil_percent)?;
    let bands = non_negative("anc", "band_percent", input.band_percent)?;
    let cells_per_ul =
        non_negative_result("anc", (wbc * 1000.0 * (neutrophils + bands)) / 100.0)?;
    trace!(cells_per_ul, "computed absolute neutrophil count");
    Some(AbsoluteNeutrophilCount {
        cells_per_ul,
        severity: NeutropeniaSeverity::from_anc(cells_per_ul),
    })
}
