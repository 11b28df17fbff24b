//! Common interface over the individual calculations.
//!
//! Every calculation is also exposed as a free function; the [`Calculator`]
//! trait lets a front end drive any of them the same way (log, compute,
//! render) without matching on each one.
//!
//! # Example
//!
//! ```
//! use onco_calc::{BsaInput, Calculator, Mosteller};
//!
//! let input = BsaInput::parse("175", "70").unwrap();
//! let bsa = Mosteller.calculate(&input).unwrap();
//! assert!((bsa.square_meters - 1.8447).abs() < 1e-4);
//! ```

use onco_model::{
    AbsoluteNeutrophilCount, BodyMassIndex, BodySurfaceArea, CalculationOptions, CalculatorKind,
    CarboplatinDose, ChildPughScore, CorrectedQt, CreatinineClearance, CtcaeGrade, EcogStatus,
    TnmStage,
};

use crate::anthropometric::{BmiInput, BsaInput, body_mass_index, body_surface_area};
use crate::cardiac::{QtcInput, corrected_qt};
use crate::dosing::{CalvertInput, calvert_dose};
use crate::grading::{GradeSelection, ctcae_grade, ecog_status};
use crate::hematology::{AncInput, absolute_neutrophil_count};
use crate::hepatic::{ChildPughInput, child_pugh};
use crate::renal::{CrClInput, creatinine_clearance};
use crate::staging::{TnmSelection, stage_tnm};

/// A single stateless calculation.
pub trait Calculator {
    /// Typed, already-parsed input.
    type Input;
    /// Result shown when the input is inside the valid domain.
    type Output;

    /// Catalog entry for this calculation.
    fn kind(&self) -> CalculatorKind;

    /// Run the calculation. `None` means the input is outside the valid domain.
    fn calculate(&self, input: &Self::Input) -> Option<Self::Output>;
}

/// Body surface area by the Mosteller formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mosteller;

impl Calculator for Mosteller {
    type Input = BsaInput;
    type Output = BodySurfaceArea;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Bsa
    }

    fn calculate(&self, input: &BsaInput) -> Option<BodySurfaceArea> {
        body_surface_area(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bmi;

impl Calculator for Bmi {
    type Input = BmiInput;
    type Output = BodyMassIndex;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Bmi
    }

    fn calculate(&self, input: &BmiInput) -> Option<BodyMassIndex> {
        body_mass_index(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Anc;

impl Calculator for Anc {
    type Input = AncInput;
    type Output = AbsoluteNeutrophilCount;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Anc
    }

    fn calculate(&self, input: &AncInput) -> Option<AbsoluteNeutrophilCount> {
        absolute_neutrophil_count(input)
    }
}

/// Calvert carboplatin dosing under a given set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calvert {
    pub options: CalculationOptions,
}

impl Calvert {
    pub fn new(options: CalculationOptions) -> Self {
        Self { options }
    }
}

impl Calculator for Calvert {
    type Input = CalvertInput;
    type Output = CarboplatinDose;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Calvert
    }

    fn calculate(&self, input: &CalvertInput) -> Option<CarboplatinDose> {
        calvert_dose(input, &self.options)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChildPugh;

impl Calculator for ChildPugh {
    type Input = ChildPughInput;
    type Output = ChildPughScore;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::ChildPugh
    }

    fn calculate(&self, input: &ChildPughInput) -> Option<ChildPughScore> {
        child_pugh(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CockcroftGault;

impl Calculator for CockcroftGault {
    type Input = CrClInput;
    type Output = CreatinineClearance;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Crcl
    }

    fn calculate(&self, input: &CrClInput) -> Option<CreatinineClearance> {
        creatinine_clearance(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bazett;

impl Calculator for Bazett {
    type Input = QtcInput;
    type Output = CorrectedQt;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Qtc
    }

    fn calculate(&self, input: &QtcInput) -> Option<CorrectedQt> {
        corrected_qt(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TnmStaging;

impl Calculator for TnmStaging {
    type Input = TnmSelection;
    type Output = TnmStage;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Stage
    }

    fn calculate(&self, input: &TnmSelection) -> Option<TnmStage> {
        stage_tnm(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ToxicityGrader;

impl Calculator for ToxicityGrader {
    type Input = GradeSelection;
    type Output = CtcaeGrade;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Toxicity
    }

    fn calculate(&self, input: &GradeSelection) -> Option<CtcaeGrade> {
        input.level.and_then(ctcae_grade)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceStatus;

impl Calculator for PerformanceStatus {
    type Input = GradeSelection;
    type Output = EcogStatus;

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Ecog
    }

    fn calculate(&self, input: &GradeSelection) -> Option<EcogStatus> {
        input.level.and_then(ecog_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            Mosteller.kind(),
            Bmi.kind(),
            Anc.kind(),
            Calvert::default().kind(),
            ChildPugh.kind(),
            CockcroftGault.kind(),
            Bazett.kind(),
            TnmStaging.kind(),
            ToxicityGrader.kind(),
            PerformanceStatus.kind(),
        ];
        for kind in CalculatorKind::ALL {
            assert_eq!(kinds.iter().filter(|k| **k == kind).count(), 1, "{kind:?}");
        }
    }

    #[test]
    fn test_unset_selection_has_no_grade() {
        let unset = GradeSelection::default();
        assert_eq!(ToxicityGrader.calculate(&unset), None);
        assert_eq!(PerformanceStatus.calculate(&unset), None);
    }
}
