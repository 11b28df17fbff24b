//! Simplified AJCC TNM stage grouping.
//!
//! The stage comes from an ordered rule table evaluated first-match-wins:
//!
//! | Order | Rule | Stage |
//! |-------|------|-------|
//! | 1 | M1 | Stage IV |
//! | 2 | T4 | Stage IIIB |
//! | 3 | N3 | Stage IIIC |
//! | 4 | T1, N0, M0 | Stage IA |
//! | 5 | anything else | Stage IIB |
//!
//! This is an illustrative grouping for a single breast cancer example, not
//! the full AJCC manual. Combinations the manual would place elsewhere (for
//! example T2N0M0) fall through to Stage IIB on purpose.

use onco_model::{MetastasisCategory, NodeCategory, Result, StageGroup, TnmStage, TumorCategory};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::validate::parse_optional_choice;

/// Current T, N and M selections. Any of them may still be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TnmSelection {
    pub tumor: Option<TumorCategory>,
    pub node: Option<NodeCategory>,
    pub metastasis: Option<MetastasisCategory>,
}

impl TnmSelection {
    pub fn new(tumor: TumorCategory, node: NodeCategory, metastasis: MetastasisCategory) -> Self {
        Self {
            tumor: Some(tumor),
            node: Some(node),
            metastasis: Some(metastasis),
        }
    }

    /// Parse raw selections; `None` or blank leaves that category unset.
    pub fn parse(tumor: Option<&str>, node: Option<&str>, metastasis: Option<&str>) -> Result<Self> {
        Ok(Self {
            tumor: parse_optional_choice(tumor)?,
            node: parse_optional_choice(node)?,
            metastasis: parse_optional_choice(metastasis)?,
        })
    }

    /// Complete selection, if all three categories are set.
    pub fn complete(&self) -> Option<Tnm> {
        Some(Tnm {
            tumor: self.tumor?,
            node: self.node?,
            metastasis: self.metastasis?,
        })
    }
}

/// A fully selected TNM combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tnm {
    pub tumor: TumorCategory,
    pub node: NodeCategory,
    pub metastasis: MetastasisCategory,
}

/// One entry of the staging cascade.
#[derive(Debug, Clone, Copy)]
pub struct StagingRule {
    pub id: &'static str,
    pub description: &'static str,
    pub matches: fn(&Tnm) -> bool,
    pub stage: StageGroup,
}

/// Staging rules in evaluation order. The last rule matches everything.
pub const STAGING_RULES: &[StagingRule] = &[
    StagingRule {
        id: "distant-metastasis",
        description: "M1 with any T and N",
        matches: |tnm| tnm.metastasis == MetastasisCategory::M1,
        stage: StageGroup::IV,
    },
    StagingRule {
        id: "t4",
        description: "T4 with any N",
        matches: |tnm| tnm.tumor == TumorCategory::T4,
        stage: StageGroup::IIIB,
    },
    StagingRule {
        id: "n3",
        description: "N3 with T1 to T3",
        matches: |tnm| tnm.node == NodeCategory::N3,
        stage: StageGroup::IIIC,
    },
    StagingRule {
        id: "t1-n0-m0",
        description: "T1 N0 M0",
        matches: |tnm| {
            tnm.tumor == TumorCategory::T1
                && tnm.node == NodeCategory::N0
                && tnm.metastasis == MetastasisCategory::M0
        },
        stage: StageGroup::IA,
    },
    StagingRule {
        id: "default",
        description: "All remaining combinations",
        matches: |_| true,
        stage: StageGroup::IIB,
    },
];

/// First rule in [`STAGING_RULES`] that matches.
pub fn matching_rule(tnm: &Tnm) -> &'static StagingRule {
    STAGING_RULES
        .iter()
        .find(|rule| (rule.matches)(tnm))
        .unwrap_or(&STAGING_RULES[STAGING_RULES.len() - 1])
}

/// Stage a selection. An incomplete selection has no stage.
pub fn stage_tnm(selection: &TnmSelection) -> Option<TnmStage> {
    let Some(tnm) = selection.complete() else {
        debug!(calculator = "stage", "incomplete TNM selection");
        return None;
    };
    let rule = matching_rule(&tnm);
    trace!(rule = rule.id, stage = %rule.stage, "matched staging rule");
    Some(TnmStage {
        tumor: tnm.tumor,
        node: tnm.node,
        metastasis: tnm.metastasis,
        stage: rule.stage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_rule_is_catch_all() {
        let last = STAGING_RULES.last().unwrap();
        assert_eq!(last.stage, StageGroup::IIB);
        let tnm = Tnm {
            tumor: TumorCategory::T2,
            node: NodeCategory::N1,
            metastasis: MetastasisCategory::M0,
        };
        assert!((last.matches)(&tnm));
        assert_eq!(matching_rule(&tnm).id, "default");
    }

    #[test]
    fn test_metastasis_wins_over_t4_and_n3() {
        let tnm = Tnm {
            tumor: TumorCategory::T4,
            node: NodeCategory::N3,
            metastasis: MetastasisCategory::M1,
        };
        assert_eq!(matching_rule(&tnm).stage, StageGroup::IV);
    }

    #[test]
    fn test_blank_selection_is_unset() {
        let selection = TnmSelection::parse(Some("T1"), Some(""), None).unwrap();
        assert_eq!(selection.tumor, Some(TumorCategory::T1));
        assert_eq!(selection.node, None);
        assert!(stage_tnm(&selection).is_none());
    }
}
