//! Tests for onco-model types.

use onco_model::{
    AbsoluteNeutrophilCount, CalculatorKind, ChildPughScore, CorrectedQt, CtcaeGrade,
    GfrCapPolicy, MetastasisCategory, NeutropeniaSeverity, NodeCategory, QtcRisk, StageGroup,
    TnmStage, TumorCategory,
};

#[test]
fn child_pugh_score_serializes() {
    let score = ChildPughScore::from_points(3, 3, 3, 3, 3);
    let json = serde_json::to_string(&score).expect("serialize score");
    let round: ChildPughScore = serde_json::from_str(&json).expect("deserialize score");
    assert_eq!(round, score);
    assert_eq!(round.total, 15);
}

#[test]
fn calculator_kind_uses_kebab_case_ids() {
    let json = serde_json::to_string(&CalculatorKind::ChildPugh).expect("serialize kind");
    assert_eq!(json, "\"child-pugh\"");
}

#[test]
fn gfr_cap_policy_serializes() {
    let json = serde_json::to_string(&GfrCapPolicy::CapAt(125.0)).expect("serialize policy");
    let round: GfrCapPolicy = serde_json::from_str(&json).expect("deserialize policy");
    assert_eq!(round, GfrCapPolicy::standard());
}

#[test]
fn results_display_with_form_precision() {
    let anc = AbsoluteNeutrophilCount {
        cells_per_ul: 2925.0,
        severity: NeutropeniaSeverity::Normal,
    };
    assert_eq!(anc.to_string(), "2925 cells/µL (Normal)");

    let qtc = CorrectedQt {
        milliseconds: 447.2136,
        rr_seconds: 0.8,
        risk: QtcRisk::Normal,
    };
    assert_eq!(qtc.to_string(), "447 ms (Normal)");

    let stage = TnmStage {
        tumor: TumorCategory::T1,
        node: NodeCategory::N0,
        metastasis: MetastasisCategory::M0,
        stage: StageGroup::IA,
    };
    assert_eq!(stage.to_string(), "T1N0M0: Stage IA (Small tumor, no nodes)");
}

#[test]
fn ctcae_display_includes_label() {
    assert_eq!(
        CtcaeGrade::LifeThreatening.to_string(),
        "Grade 4 (Life-threatening)"
    );
}
