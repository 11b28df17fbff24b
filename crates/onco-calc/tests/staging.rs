//! Staging cascade over every TNM combination.

use onco_calc::{STAGING_RULES, TnmSelection, TnmStaging, Calculator, stage_tnm};
use onco_model::{MetastasisCategory, NodeCategory, StageGroup, TumorCategory};

const TUMORS: [TumorCategory; 4] = [
    TumorCategory::T1,
    TumorCategory::T2,
    TumorCategory::T3,
    TumorCategory::T4,
];
const NODES: [NodeCategory; 4] = [
    NodeCategory::N0,
    NodeCategory::N1,
    NodeCategory::N2,
    NodeCategory::N3,
];
const METASTASES: [MetastasisCategory; 2] = [MetastasisCategory::M0, MetastasisCategory::M1];

fn expected(t: TumorCategory, n: NodeCategory, m: MetastasisCategory) -> StageGroup {
    if m == MetastasisCategory::M1 {
        StageGroup::IV
    } else if t == TumorCategory::T4 {
        StageGroup::IIIB
    } else if n == NodeCategory::N3 {
        StageGroup::IIIC
    } else if t == TumorCategory::T1 && n == NodeCategory::N0 {
        StageGroup::IA
    } else {
        StageGroup::IIB
    }
}

#[test]
fn every_combination_follows_the_cascade() {
    for t in TUMORS {
        for n in NODES {
            for m in METASTASES {
                let staged = stage_tnm(&TnmSelection::new(t, n, m)).expect("complete selection");
                assert_eq!(staged.stage, expected(t, n, m), "{t}{n}{m}");
            }
        }
    }
}

#[test]
fn reference_stages() {
    let stage = |t, n, m| stage_tnm(&TnmSelection::new(t, n, m)).map(|s| s.stage.label());
    assert_eq!(
        stage(TumorCategory::T1, NodeCategory::N0, MetastasisCategory::M0),
        Some("Stage IA")
    );
    assert_eq!(
        stage(TumorCategory::T4, NodeCategory::N0, MetastasisCategory::M0),
        Some("Stage IIIB")
    );
    assert_eq!(
        stage(TumorCategory::T2, NodeCategory::N3, MetastasisCategory::M0),
        Some("Stage IIIC")
    );
    assert_eq!(
        stage(TumorCategory::T1, NodeCategory::N0, MetastasisCategory::M1),
        Some("Stage IV")
    );
    assert_eq!(
        stage(TumorCategory::T2, NodeCategory::N0, MetastasisCategory::M0),
        Some("Stage IIB")
    );
}

#[test]
fn t4_n3_is_stage_iiib() {
    let staged = TnmStaging
        .calculate(&TnmSelection::new(
            TumorCategory::T4,
            NodeCategory::N3,
            MetastasisCategory::M0,
        ))
        .expect("staged");
    assert_eq!(staged.stage, StageGroup::IIIB);
}

#[test]
fn incomplete_selection_has_no_stage() {
    let partial = TnmSelection {
        tumor: Some(TumorCategory::T1),
        node: Some(NodeCategory::N0),
        metastasis: None,
    };
    assert!(stage_tnm(&partial).is_none());
    assert!(stage_tnm(&TnmSelection::default()).is_none());
}

#[test]
fn rule_table_has_five_rules_ending_in_default() {
    let ids: Vec<&str> = STAGING_RULES.iter().map(|rule| rule.id).collect();
    assert_eq!(ids, vec!["distant-metastasis", "t4", "n3", "t1-n0-m0", "default"]);
}

#[test]
fn staged_result_snapshot() {
    let staged = stage_tnm(
        &TnmSelection::parse(Some("T1"), Some("N0"), Some("M0")).expect("parse selection"),
    )
    .expect("staged");
    insta::assert_snapshot!(staged.to_string(), @"T1N0M0: Stage IA (Small tumor, no nodes)");
    insta::assert_json_snapshot!(staged, @r#"
    {
      "tumor": "T1",
      "node": "N0",
      "metastasis": "M0",
      "stage": "IA"
    }
    "#);
}
