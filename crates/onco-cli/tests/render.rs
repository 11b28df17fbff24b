//! Integration tests for evaluation rendering.

use onco_calc::{
    BsaInput, Calvert, CalvertInput, ChildPugh, ChildPughInput, GradeSelection, Mosteller,
    QtcInput, Bazett, TnmSelection, TnmStaging, ToxicityGrader,
};
use onco_cli::evaluation::evaluate;
use onco_cli::render::{Tone, catalog_json, evaluation_json, evaluation_rows};
use onco_model::{CalculationOptions, GfrCapPolicy};

#[test]
fn bsa_json_snapshot() {
    let evaluation = evaluate(&Mosteller, BsaInput::parse("180", "80").expect("parse"));
    insta::assert_snapshot!(evaluation_json(&evaluation).expect("json"), @r#"
    {
      "calculator": "bsa",
      "title": "BSA Calculator (Mosteller)",
      "input": {
        "height_cm": 180.0,
        "weight_kg": 80.0
      },
      "result": {
        "square_meters": 2.0
      }
    }
    "#);
}

#[test]
fn missing_result_serializes_as_null() {
    let selection = TnmSelection::parse(Some("T2"), None, Some("M0")).expect("parse");
    let evaluation = evaluate(&TnmStaging, selection);
    assert!(!evaluation.has_result());
    let json: serde_json::Value =
        serde_json::from_str(&evaluation_json(&evaluation).expect("json")).expect("valid json");
    assert!(json["result"].is_null());
    assert_eq!(json["input"]["node"], serde_json::Value::Null);

    let rows = evaluation_rows(&evaluation);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tone, Tone::Alert);
}

#[test]
fn capped_calvert_row_is_flagged() {
    let calvert =
        Calvert::new(CalculationOptions::new().with_gfr_cap(GfrCapPolicy::standard()));
    let evaluation = evaluate(&calvert, CalvertInput::parse("5", "150").expect("parse"));
    let rows = evaluation_rows(&evaluation);
    assert_eq!(rows[0].value, "750 mg");
    let gfr = rows.iter().find(|row| row.label == "GFR used").expect("gfr row");
    assert_eq!(gfr.value, "125 mL/min (capped)");
    assert_eq!(gfr.tone, Tone::Caution);
}

#[test]
fn child_pugh_rows() {
    let input = ChildPughInput::parse("2.5", "3.0", "1.5", "slight", "none").expect("parse");
    let rows = evaluation_rows(&evaluate(&ChildPugh, input));
    let values: Vec<(&str, &str)> = rows
        .iter()
        .map(|row| (row.label, row.value.as_str()))
        .collect();
    assert_eq!(values[0], ("Score", "8"));
    assert_eq!(values[1], ("Class", "B"));
    assert_eq!(values[2], ("1-year survival", "80% (1yr)"));
}

#[test]
fn qtc_high_risk_is_alert() {
    let rows = evaluation_rows(&evaluate(
        &Bazett,
        QtcInput::parse("500", "100").expect("parse"),
    ));
    let risk = rows.iter().find(|row| row.label == "Risk").expect("risk row");
    assert_eq!(risk.value, "High Risk");
    assert_eq!(risk.tone, Tone::Alert);
}

#[test]
fn toxicity_grade_rows() {
    let rows = evaluation_rows(&evaluate(
        &ToxicityGrader,
        GradeSelection::parse_ctcae("3").expect("parse"),
    ));
    assert_eq!(rows[0].value, "3 (Severe)");
    assert_eq!(rows[0].tone, Tone::Alert);
}

#[test]
fn catalog_lists_every_calculator() {
    let json: serde_json::Value =
        serde_json::from_str(&catalog_json().expect("json")).expect("valid json");
    let entries = json.as_array().expect("array");
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["id"], "bsa");
    assert_eq!(entries[0]["category"], "Dosing & Metrics");
}
