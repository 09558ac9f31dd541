//! PackageSpec Value Object
//!
//! Weight and outer dimensions of the package to be shipped.
//! Every measurement must be a positive, finite number.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSpec {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub width_cm: f64,
    pub length_cm: f64,
}

impl PackageSpec {
    /// Create a package spec, rejecting non-positive or non-finite measurements
    pub fn new(weight_kg: f64, height_cm: f64, width_cm: f64, length_cm: f64) -> AppResult<Self> {
        Self::check("weightKg", weight_kg)?;
        Self::check("heightCm", height_cm)?;
        Self::check("widthCm", width_cm)?;
        Self::check("lengthCm", length_cm)?;

        Ok(Self {
            weight_kg,
            height_cm,
            width_cm,
            length_cm,
        })
    }

    fn check(field: &'static str, value: f64) -> AppResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(
                AppError::bad_request(format!("{field} must be a positive number"))
                    .with_field(field),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let spec = PackageSpec::new(2.5, 30.0, 20.0, 15.0).unwrap();
        assert_eq!(spec.weight_kg, 2.5);
        assert_eq!(spec.length_cm, 15.0);
    }

    #[test]
    fn test_new_rejects_zero_weight() {
        let err = PackageSpec::new(0.0, 30.0, 20.0, 15.0).unwrap_err();
        assert_eq!(err.field(), Some("weightKg"));
    }

    #[test]
    fn test_new_rejects_negative_dimension() {
        let err = PackageSpec::new(2.5, 30.0, -1.0, 15.0).unwrap_err();
        assert_eq!(err.field(), Some("widthCm"));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(PackageSpec::new(f64::NAN, 30.0, 20.0, 15.0).is_err());
        assert!(PackageSpec::new(2.5, f64::INFINITY, 20.0, 15.0).is_err());
    }
}
