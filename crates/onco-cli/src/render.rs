//! Table and JSON rendering of calculator outcomes.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use onco_model::{
    AbsoluteNeutrophilCount, BmiCategory, BodyMassIndex, BodySurfaceArea, CalculatorCategory,
    CalculatorKind, CarboplatinDose, ChildPughClass, ChildPughScore, CorrectedQt,
    CreatinineClearance, CtcaeGrade, EcogStatus, NeutropeniaSeverity, QtcRisk, StageGroup,
    TnmStage,
};
use serde::Serialize;

use crate::evaluation::Evaluation;

/// How a value should stand out in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Normal,
    Caution,
    Alert,
}

/// One labelled line of a rendered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

impl ResultRow {
    fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            tone: Tone::Plain,
        }
    }

    fn toned(label: &'static str, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label,
            value: value.into(),
            tone,
        }
    }
}

/// Rows shown for a calculator result.
pub trait ResultRows {
    fn rows(&self) -> Vec<ResultRow>;
}

impl ResultRows for BodySurfaceArea {
    fn rows(&self) -> Vec<ResultRow> {
        vec![ResultRow::plain("BSA", self.to_string())]
    }
}

impl ResultRows for BodyMassIndex {
    fn rows(&self) -> Vec<ResultRow> {
        let tone = match self.category {
            BmiCategory::Normal => Tone::Normal,
            BmiCategory::Underweight | BmiCategory::Overweight => Tone::Caution,
            BmiCategory::Obese => Tone::Alert,
        };
        vec![
            ResultRow::plain("BMI", format!("{:.1} kg/m²", self.value)),
            ResultRow::toned("Category", self.category.as_str(), tone),
        ]
    }
}

impl ResultRows for AbsoluteNeutrophilCount {
    fn rows(&self) -> Vec<ResultRow> {
        let tone = match self.severity {
            NeutropeniaSeverity::Normal => Tone::Normal,
            NeutropeniaSeverity::Mild => Tone::Caution,
            NeutropeniaSeverity::Moderate | NeutropeniaSeverity::Severe => Tone::Alert,
        };
        vec![
            ResultRow::plain("ANC", format!("{:.0} cells/µL", self.cells_per_ul)),
            ResultRow::toned("Severity", self.severity.as_str(), tone),
        ]
    }
}

impl ResultRows for CarboplatinDose {
    fn rows(&self) -> Vec<ResultRow> {
        let gfr = if self.gfr_capped {
            ResultRow::toned(
                "GFR used",
                format!("{:.0} mL/min (capped)", self.gfr_used),
                Tone::Caution,
            )
        } else {
            ResultRow::plain("GFR used", format!("{:.0} mL/min", self.gfr_used))
        };
        vec![
            ResultRow::plain("Dose", self.to_string()),
            ResultRow::plain("Target AUC", format!("{}", self.target_auc)),
            gfr,
        ]
    }
}

impl ResultRows for CreatinineClearance {
    fn rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::plain("CrCl", self.to_string()),
            ResultRow::plain("Sex", self.sex.as_str()),
        ]
    }
}

impl ResultRows for ChildPughScore {
    fn rows(&self) -> Vec<ResultRow> {
        let tone = match self.class {
            ChildPughClass::A => Tone::Normal,
            ChildPughClass::B => Tone::Caution,
            ChildPughClass::C => Tone::Alert,
        };
        vec![
            ResultRow::plain("Score", self.total.to_string()),
            ResultRow::toned("Class", self.class.as_str(), tone),
            ResultRow::plain("1-year survival", self.one_year_survival()),
            ResultRow::plain(
                "Points",
                format!(
                    "bilirubin {}, albumin {}, INR {}, ascites {}, encephalopathy {}",
                    self.bilirubin_points,
                    self.albumin_points,
                    self.inr_points,
                    self.ascites_points,
                    self.encephalopathy_points
                ),
            ),
        ]
    }
}

impl ResultRows for CorrectedQt {
    fn rows(&self) -> Vec<ResultRow> {
        let tone = match self.risk {
            QtcRisk::Normal => Tone::Normal,
            QtcRisk::Borderline => Tone::Caution,
            QtcRisk::HighRisk => Tone::Alert,
        };
        vec![
            ResultRow::plain("QTc", format!("{:.0} ms", self.milliseconds)),
            ResultRow::plain("RR interval", format!("{:.3} s", self.rr_seconds)),
            ResultRow::toned("Risk", self.risk.as_str(), tone),
        ]
    }
}

impl ResultRows for TnmStage {
    fn rows(&self) -> Vec<ResultRow> {
        let tone = match self.stage {
            StageGroup::IA => Tone::Normal,
            StageGroup::IIB => Tone::Caution,
            StageGroup::IIIB | StageGroup::IIIC | StageGroup::IV => Tone::Alert,
        };
        vec![
            ResultRow::plain("TNM", format!("{}{}{}", self.tumor, self.node, self.metastasis)),
            ResultRow::toned("Stage", self.stage.label(), tone),
            ResultRow::plain("Description", self.stage.description()),
        ]
    }
}

impl ResultRows for CtcaeGrade {
    fn rows(&self) -> Vec<ResultRow> {
        let tone = if self.is_high_grade() {
            Tone::Alert
        } else {
            Tone::Caution
        };
        vec![
            ResultRow::toned("Grade", format!("{} ({})", self.level(), self.label()), tone),
            ResultRow::plain("Description", self.description()),
        ]
    }
}

impl ResultRows for EcogStatus {
    fn rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::plain("ECOG", self.level().to_string()),
            ResultRow::plain("Description", self.description()),
        ]
    }
}

/// Rows for an evaluation, with a single placeholder row when there is no result.
pub fn evaluation_rows<I, O: ResultRows>(evaluation: &Evaluation<I, O>) -> Vec<ResultRow> {
    match &evaluation.result {
        Some(result) => result.rows(),
        None => vec![ResultRow::toned(
            "Result",
            "not computable from the given input",
            Tone::Alert,
        )],
    }
}

pub fn evaluation_table<I, O: ResultRows>(evaluation: &Evaluation<I, O>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(evaluation.title),
        header_cell(evaluation.calculator.category().as_str()),
    ]);
    apply_table_style(&mut table);
    for row in evaluation_rows(evaluation) {
        table.add_row(vec![Cell::new(row.label), tone_cell(&row.value, row.tone)]);
    }
    table
}

pub fn evaluation_json<I: Serialize, O: Serialize>(evaluation: &Evaluation<I, O>) -> Result<String> {
    serde_json::to_string_pretty(evaluation).context("serialize evaluation")
}

/// Catalog of calculators grouped by category.
pub fn catalog_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Command"),
        header_cell("Calculator"),
        header_cell("Category"),
    ]);
    apply_table_style(&mut table);
    for category in [
        CalculatorCategory::Dosing,
        CalculatorCategory::RenalHepatic,
        CalculatorCategory::Hematology,
        CalculatorCategory::Staging,
        CalculatorCategory::Toxicity,
        CalculatorCategory::Cardiac,
    ] {
        for kind in CalculatorKind::in_category(category) {
            table.add_row(vec![
                Cell::new(kind.id())
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(kind.title()),
                Cell::new(category.as_str()).fg(Color::DarkGrey),
            ]);
        }
    }
    table
}

#[derive(Serialize)]
struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    category: &'static str,
}

pub fn catalog_json() -> Result<String> {
    let entries: Vec<CatalogEntry> = CalculatorKind::ALL
        .iter()
        .map(|kind| CatalogEntry {
            id: kind.id(),
            title: kind.title(),
            category: kind.category().as_str(),
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("serialize catalog")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn tone_cell(value: &str, tone: Tone) -> Cell {
    match tone {
        Tone::Plain => Cell::new(value),
        Tone::Normal => Cell::new(value).fg(Color::Green),
        Tone::Caution => Cell::new(value).fg(Color::Yellow),
        Tone::Alert => Cell::new(value)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}
