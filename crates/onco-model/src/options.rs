//! Configuration options for calculations.

use serde::{Deserialize, Serialize};

/// Conventional institutional GFR ceiling for Calvert dosing, in mL/min.
pub const STANDARD_GFR_CAP: f64 = 125.0;

/// Policy for capping GFR before it enters the Calvert formula.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum GfrCapPolicy {
    /// Use the supplied GFR unchanged.
    #[default]
    Uncapped,
    /// Limit GFR to the given value in mL/min.
    CapAt(f64),
}

impl GfrCapPolicy {
    /// Cap at [`STANDARD_GFR_CAP`].
    pub fn standard() -> Self {
        GfrCapPolicy::CapAt(STANDARD_GFR_CAP)
    }

    /// Returns the GFR to use and whether the cap lowered it.
    pub fn apply(&self, gfr: f64) -> (f64, bool) {
        match *self {
            GfrCapPolicy::Uncapped => (gfr, false),
            GfrCapPolicy::CapAt(limit) if gfr > limit => (limit, true),
            GfrCapPolicy::CapAt(_) => (gfr, false),
        }
    }
}

/// Options shared by calculations that support institutional policy choices.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationOptions {
    pub gfr_cap: GfrCapPolicy,
}

impl CalculationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_gfr_cap(mut self, policy: GfrCapPolicy) -> Self {
        self.gfr_cap = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_only_lowers() {
        let policy = GfrCapPolicy::standard();
        assert_eq!(policy.apply(150.0), (125.0, true));
        assert_eq!(policy.apply(80.0), (80.0, false));
        assert_eq!(GfrCapPolicy::Uncapped.apply(150.0), (150.0, false));
    }
}
