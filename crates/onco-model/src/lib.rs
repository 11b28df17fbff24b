pub mod anthropometric;
pub mod cardiac;
pub mod catalog;
pub mod enums;
pub mod error;
pub mod grading;
pub mod hematology;
pub mod hepatic;
pub mod options;
pub mod renal;
pub mod staging;

pub use anthropometric::{BmiCategory, BodyMassIndex, BodySurfaceArea};
pub use cardiac::{CorrectedQt, QtcRisk};
pub use catalog::{CalculatorCategory, CalculatorKind};
pub use enums::{Ascites, Encephalopathy, MetastasisCategory, NodeCategory, Sex, TumorCategory};
pub use error::{InputError, Result};
pub use grading::{CtcaeGrade, EcogStatus};
pub use hematology::{AbsoluteNeutrophilCount, NeutropeniaSeverity};
pub use hepatic::{ChildPughClass, ChildPughScore};
pub use options::{CalculationOptions, GfrCapPolicy, STANDARD_GFR_CAP};
pub use renal::{CarboplatinDose, CreatinineClearance};
pub use staging::{StageGroup, TnmStage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_names_field() {
        let error = InputError::NotPositive {
            field: "weight_kg",
            value: 0.0,
        };
        assert_eq!(error.field(), "weight_kg");
        assert_eq!(error.to_string(), "weight_kg must be greater than zero, got 0");
    }
}
