//! Caller-owned market parameters.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::types::ModelError;

/// Accepted tax-amount range, per the front-end slider bounds.
pub const TAX_RANGE: (f64, f64) = (0.0, 40.0);

/// Accepted elasticity range, per the front-end slider bounds.
pub const ELASTICITY_RANGE: (f64, f64) = (0.1, 5.0);

/// Which side of the market the tax is legally levied on.
///
/// The target determines which curve the sampler shifts; it does not by
/// itself determine the economic incidence, which the solver derives from
/// the elasticities alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxTarget {
    /// Tax remitted by buyers; shifts the demand curve down.
    Consumer,
    /// Tax remitted by sellers; shifts the supply curve up.
    Producer,
}

impl fmt::Display for TaxTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxTarget::Consumer => write!(f, "consumer"),
            TaxTarget::Producer => write!(f, "producer"),
        }
    }
}

impl FromStr for TaxTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consumer" => Ok(TaxTarget::Consumer),
            "producer" => Ok(TaxTarget::Producer),
            other => Err(format!(
                "Unknown tax target: {}. Supported: consumer, producer",
                other
            )),
        }
    }
}

/// Per-interaction market parameters.
///
/// Owned by the caller and recreated on every user interaction; the kernel
/// reads it and never mutates it. Bounds are enforced by
/// [`MarketParameters::validate`] on the caller's side, not inside the
/// solver or the sampler.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use incidence_core::market::{MarketParameters, TaxTarget};
///
/// let params = MarketParameters::new(20.0_f64, 1.0, 0.5, TaxTarget::Producer);
/// assert!(params.validate().is_ok());
///
/// let bad = MarketParameters::new(55.0_f64, 1.0, 0.5, TaxTarget::Producer);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters<T: Float> {
    /// Per-unit tax amount (non-negative)
    pub tax_amount: T,
    /// Price-elasticity of demand (strictly positive)
    pub demand_elasticity: T,
    /// Price-elasticity of supply (strictly positive)
    pub supply_elasticity: T,
    /// Side of the market the tax is levied on
    pub tax_target: TaxTarget,
}

impl<T: Float> MarketParameters<T> {
    /// Construct a parameter record.
    ///
    /// No bounds are checked here; call [`MarketParameters::validate`]
    /// before handing the record to the kernel.
    pub fn new(
        tax_amount: T,
        demand_elasticity: T,
        supply_elasticity: T,
        tax_target: TaxTarget,
    ) -> Self {
        Self {
            tax_amount,
            demand_elasticity,
            supply_elasticity,
            tax_target,
        }
    }

    /// Check the caller-side bounds.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Tax in `[0, 40]`, both elasticities in `[0.1, 5.0]`
    /// * `Err(ModelError::TaxOutOfRange)` - Tax outside its range
    /// * `Err(ModelError::ElasticityOutOfRange)` - Either elasticity outside its range
    ///
    /// # Example
    ///
    /// ```
    /// use incidence_core::market::{MarketParameters, TaxTarget};
    /// use incidence_core::types::ModelError;
    ///
    /// let params = MarketParameters::new(10.0_f64, 0.05, 1.0, TaxTarget::Consumer);
    /// match params.validate() {
    ///     Err(ModelError::ElasticityOutOfRange { name, .. }) => assert_eq!(name, "demand"),
    ///     other => panic!("expected elasticity error, got {:?}", other),
    /// }
    /// ```
    pub fn validate(&self) -> Result<(), ModelError> {
        let (tax_min, tax_max) = TAX_RANGE;
        let (e_min, e_max) = ELASTICITY_RANGE;

        let tax = self.tax_amount.to_f64().unwrap_or(f64::NAN);
        if !(tax >= tax_min && tax <= tax_max) {
            return Err(ModelError::TaxOutOfRange {
                value: tax,
                min: tax_min,
                max: tax_max,
            });
        }

        for (name, value) in [
            ("demand", self.demand_elasticity),
            ("supply", self.supply_elasticity),
        ] {
            let e = value.to_f64().unwrap_or(f64::NAN);
            if !(e >= e_min && e <= e_max) {
                return Err(ModelError::ElasticityOutOfRange {
                    name,
                    value: e,
                    min: e_min,
                    max: e_max,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> MarketParameters<f64> {
        MarketParameters::new(20.0, 1.0, 1.0, TaxTarget::Producer)
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_range_endpoints() {
        let p = MarketParameters::new(0.0_f64, 0.1, 5.0, TaxTarget::Consumer);
        assert!(p.validate().is_ok());
        let p = MarketParameters::new(40.0_f64, 5.0, 0.1, TaxTarget::Consumer);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_tax() {
        let mut p = valid_params();
        p.tax_amount = -0.5;
        match p.validate() {
            Err(ModelError::TaxOutOfRange { value, .. }) => assert_eq!(value, -0.5),
            other => panic!("expected TaxOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_oversized_tax() {
        let mut p = valid_params();
        p.tax_amount = 40.01;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_tiny_demand_elasticity() {
        let mut p = valid_params();
        p.demand_elasticity = 0.05;
        match p.validate() {
            Err(ModelError::ElasticityOutOfRange { name, .. }) => assert_eq!(name, "demand"),
            other => panic!("expected ElasticityOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_oversized_supply_elasticity() {
        let mut p = valid_params();
        p.supply_elasticity = 5.5;
        match p.validate() {
            Err(ModelError::ElasticityOutOfRange { name, .. }) => assert_eq!(name, "supply"),
            other => panic!("expected ElasticityOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan_tax() {
        let mut p = valid_params();
        p.tax_amount = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_tax_target_display_round_trip() {
        for target in [TaxTarget::Consumer, TaxTarget::Producer] {
            let parsed: TaxTarget = target.to_string().parse().unwrap();
            assert_eq!(parsed, target);
        }
    }

    #[test]
    fn test_tax_target_from_str_rejects_unknown() {
        assert!("government".parse::<TaxTarget>().is_err());
    }

    #[test]
    fn test_tax_target_serde_snake_case() {
        let json = serde_json::to_string(&TaxTarget::Consumer).unwrap();
        assert_eq!(json, "\"consumer\"");
    }
}
