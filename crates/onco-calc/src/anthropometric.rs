//! Body surface area and body mass index.

use onco_model::{BmiCategory, BodyMassIndex, BodySurfaceArea, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::validate::{parse_positive, positive, positive_result};

/// Height and weight for the Mosteller formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BsaInput {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl BsaInput {
    pub fn parse(height_cm: &str, weight_kg: &str) -> Result<Self> {
        Ok(Self {
            height_cm: parse_positive("height_cm", height_cm)?,
            weight_kg: parse_positive("weight_kg", weight_kg)?,
        })
    }
}

/// Mosteller: `sqrt(height_cm * weight_kg / 3600)`.
pub fn body_surface_area(input: &BsaInput) -> Option<BodySurfaceArea> {
    let height = positive("bsa", "height_cm", input.height_cm)?;
    let weight = positive("bsa", "weight_kg", input.weight_kg)?;
    let square_meters = positive_result("bsa", ((height * weight) / 3600.0).sqrt())?;
    trace!(square_meters, "computed body surface area");
    Some(BodySurfaceArea { square_meters })
}

/// Weight and height for the body mass index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl BmiInput {
    pub fn parse(weight_kg: &str, height_cm: &str) -> Result<Self> {
        Ok(Self {
            weight_kg: parse_positive("weight_kg", weight_kg)?,
            height_cm: parse_positive("height_cm", height_cm)?,
        })
    }
}

/// `weight_kg / height_m²`, with height supplied in centimeters.
pub fn body_mass_index(input: &BmiInput) -> Option<BodyMassIndex> {
    let weight = positive("bmi", "weight_kg", input.weight_kg)?;
    let height_m = positive("bmi", "height_cm", input.height_cm)? / 100.0;
    let value = positive_result("bmi", weight / (height_m * height_m))?;
    trace!(value, "computed body mass index");
    Some(BodyMassIndex {
        value,
        category: BmiCategory::from_bmi(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mosteller_reference_patient() {
        let bsa = body_surface_area(&BsaInput {
            height_cm: 175.0,
            weight_kg: 70.0,
        })
        .unwrap();
        assert!((bsa.square_meters - 1.8447).abs() < 1e-4);
    }

    #[test]
    fn test_bmi_reference_patient() {
        let bmi = body_mass_index(&BmiInput {
            weight_kg: 70.0,
            height_cm: 175.0,
        })
        .unwrap();
        assert!((bmi.value - 22.857).abs() < 1e-3);
        assert_eq!(bmi.category, BmiCategory::Normal);
    }

    #[test]
    fn test_zero_or_negative_gives_no_result() {
        assert!(
            body_surface_area(&BsaInput {
                height_cm: 0.0,
                weight_kg: 70.0
            })
            .is_none()
        );
        assert!(
            body_mass_index(&BmiInput {
                weight_kg: -70.0,
                height_cm: 175.0
            })
            .is_none()
        );
    }

    #[test]
    fn test_overflow_gives_no_result() {
        let huge = BsaInput::parse("1e200", "1e200").unwrap();
        assert!(body_surface_area(&huge).is_none());
        let tiny_height = BmiInput::parse("70", "1e-160").unwrap();
        assert!(body_mass_index(&tiny_height).is_none());
    }
}
