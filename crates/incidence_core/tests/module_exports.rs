//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that market types are accessible via absolute path.
#[test]
fn test_market_module_exports() {
    use incidence_core::market::constants::MarketConstants;
    use incidence_core::market::parameters::{MarketParameters, TaxTarget};
    use incidence_core::market::parameters::{ELASTICITY_RANGE, TAX_RANGE};

    let constants: MarketConstants<f64> = MarketConstants::default();
    let params = MarketParameters::new(20.0, 1.0, 1.0, TaxTarget::Producer);
    assert!(params.validate().is_ok());
    assert_eq!(constants.domain_max, 100.0);
    assert_eq!(TAX_RANGE.1, 40.0);
    assert_eq!(ELASTICITY_RANGE.0, 0.1);
}

/// Test that the solver is accessible via absolute path.
#[test]
fn test_equilibrium_module_exports() {
    use incidence_core::equilibrium::{solve, Equilibrium};
    use incidence_core::market::MarketConstants;

    let constants = MarketConstants::default();
    let eq: Equilibrium<f64> = solve(&constants, 0.0, 1.0, 1.0);
    assert_eq!(eq.new_quantity, 50.0);
    assert_eq!(eq.tax_revenue(&constants), 0.0);
}

/// Test that the sampler is accessible via absolute path.
#[test]
fn test_curve_module_exports() {
    use incidence_core::curve::{sample, CurvePoint, CurveSide, OVERSCAN, SAMPLE_STEP};
    use incidence_core::market::{MarketConstants, TaxTarget};

    let pts: Vec<CurvePoint<f64>> = sample(
        &MarketConstants::default(),
        CurveSide::Supply,
        1.0,
        TaxTarget::Producer,
        0.0,
    );
    assert_eq!(pts.len(), 51);
    assert_eq!(SAMPLE_STEP, 2);
    assert_eq!(OVERSCAN, 10.0);
}

/// Test that classification is accessible via absolute path.
#[test]
fn test_classify_module_exports() {
    use incidence_core::classify::{compare, ElasticityComparison};

    assert_eq!(compare(1.0_f64, 1.0), ElasticityComparison::Equal);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use incidence_core::types::error::ModelError;
    use incidence_core::types::ModelError as ReExported;

    let err = ModelError::TaxOutOfRange {
        value: 50.0,
        min: 0.0,
        max: 40.0,
    };
    let _: ReExported = err.clone();
    let _: &dyn std::error::Error = &err;
}

/// Test that result records serialise for the service layer.
#[test]
fn test_serde_round_trip() {
    use incidence_core::equilibrium::{solve, Equilibrium};
    use incidence_core::market::MarketConstants;

    let eq = solve(&MarketConstants::default(), 20.0_f64, 1.0, 0.5);
    let json = serde_json::to_string(&eq).unwrap();
    let back: Equilibrium<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(eq, back);
}
