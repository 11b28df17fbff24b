//! TNM stage groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{MetastasisCategory, NodeCategory, TumorCategory};

/// Anatomic stage group produced by the simplified staging rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageGroup {
    IA,
    IIB,
    IIIB,
    IIIC,
    IV,
}

impl StageGroup {
    pub fn label(&self) -> &'static str {
        match self {
            StageGroup::IA => "Stage IA",
            StageGroup::IIB => "Stage IIB",
            StageGroup::IIIB => "Stage IIIB",
            StageGroup::IIIC => "Stage IIIC",
            StageGroup::IV => "Stage IV",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StageGroup::IA => "Small tumor, no nodes",
            StageGroup::IIB => "Moderate tumor size or limited nodal involvement",
            StageGroup::IIIB => "Large tumor with skin/chest wall involvement",
            StageGroup::IIIC => "Extensive nodal involvement",
            StageGroup::IV => "Metastatic disease",
        }
    }
}

impl fmt::Display for StageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Staged TNM combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TnmStage {
    pub tumor: TumorCategory,
    pub node: NodeCategory,
    pub metastasis: MetastasisCategory,
    pub stage: StageGroup,
}

impl fmt::Display for TnmStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}: {} ({})",
            self.tumor,
            self.node,
            self.metastasis,
            self.stage,
            self.stage.description()
        )
    }
}
