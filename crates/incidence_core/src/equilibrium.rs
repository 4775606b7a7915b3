//! Closed-form equilibrium solver for a per-unit tax.
//!
//! Solving the two linear curves for a wedge of `tax_amount` between the
//! price paid and the price received gives the post-tax equilibrium in
//! closed form; no iteration or numerical root finding is involved. The
//! side with the smaller elasticity (the steeper curve) absorbs
//! proportionally more of the tax.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::market::MarketConstants;

/// Post-tax market equilibrium.
///
/// A derived value, recomputed fresh on every [`solve`] call; callers hold
/// it by value and never mutate it in place.
///
/// # Invariants
///
/// - `new_quantity >= 0`
/// - `consumer_share_pct + producer_share_pct == 100` (within floating-point
///   tolerance) whenever the implied tax revenue is positive; both are zero
///   when it is not.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium<T: Float> {
    /// Market-clearing quantity after the tax
    pub new_quantity: T,
    /// Price paid by consumers (tax inclusive)
    pub consumer_price: T,
    /// Price received by producers (tax exclusive)
    pub producer_price: T,
    /// Share of the tax burden borne by consumers, in percent
    pub consumer_share_pct: T,
    /// Share of the tax burden borne by producers, in percent
    pub producer_share_pct: T,
}

impl<T: Float> Equilibrium<T> {
    /// Total tax paid by consumers: `(consumer_price - p0) * new_quantity`.
    pub fn consumer_burden(&self, constants: &MarketConstants<T>) -> T {
        (self.consumer_price - constants.p0) * self.new_quantity
    }

    /// Total tax absorbed by producers: `(p0 - producer_price) * new_quantity`.
    pub fn producer_burden(&self, constants: &MarketConstants<T>) -> T {
        (constants.p0 - self.producer_price) * self.new_quantity
    }

    /// Implied tax revenue: the sum of the two burdens.
    ///
    /// Zero when the tax eliminates all trade (`new_quantity == 0`).
    pub fn tax_revenue(&self, constants: &MarketConstants<T>) -> T {
        self.consumer_burden(constants) + self.producer_burden(constants)
    }
}

/// Solve for the post-tax equilibrium.
///
/// # Arguments
///
/// * `constants` - Baseline market table
/// * `tax_amount` - Per-unit tax (expected non-negative)
/// * `demand_elasticity` - Ed (expected strictly positive)
/// * `supply_elasticity` - Es (expected strictly positive)
///
/// # Algorithm
///
/// ```text
/// combined = 1/Ed + 1/Es
/// Q1 = max(0, Q0 - tax / combined)
/// Pc = P0 + (Q0 - Q1) / Ed
/// Pp = P0 + (Q1 - Q0) / Es        (decreases as quantity falls)
/// ```
///
/// Burden shares are the two price wedges weighted by the traded quantity,
/// normalised to percent. A tax large enough to eliminate all trade floors
/// `Q1` at zero, which collapses both burdens to zero as well.
///
/// # Degenerate inputs
///
/// The function never fails. A combined elasticity of exactly zero
/// (unreachable while both elasticities are positive) returns the untaxed
/// baseline, and a non-positive implied revenue reports 0/0 shares instead
/// of a 0/0 division.
///
/// # Example
///
/// ```
/// use incidence_core::equilibrium::solve;
/// use incidence_core::market::MarketConstants;
///
/// let constants = MarketConstants::default();
/// let eq = solve(&constants, 20.0_f64, 1.0, 0.5);
///
/// assert!((eq.new_quantity - 130.0 / 3.0).abs() < 1e-9);
/// assert!((eq.consumer_share_pct - 100.0 / 3.0).abs() < 1e-9);
/// assert!((eq.producer_share_pct - 200.0 / 3.0).abs() < 1e-9);
/// ```
pub fn solve<T: Float>(
    constants: &MarketConstants<T>,
    tax_amount: T,
    demand_elasticity: T,
    supply_elasticity: T,
) -> Equilibrium<T> {
    let p0 = constants.p0;
    let q0 = constants.q0;

    let combined = demand_elasticity.recip() + supply_elasticity.recip();
    if combined == T::zero() {
        return Equilibrium {
            new_quantity: q0,
            consumer_price: p0,
            producer_price: p0,
            consumer_share_pct: T::zero(),
            producer_share_pct: T::zero(),
        };
    }

    let new_quantity = (q0 - tax_amount / combined).max(T::zero());
    let consumer_price = p0 + (q0 - new_quantity) / demand_elasticity;
    let producer_price = p0 + (new_quantity - q0) / supply_elasticity;

    let consumer_burden = (consumer_price - p0) * new_quantity;
    let producer_burden = (p0 - producer_price) * new_quantity;
    let total = consumer_burden + producer_burden;

    let hundred = T::from(100.0).unwrap();
    let (consumer_share_pct, producer_share_pct) = if total > T::zero() {
        (
            hundred * consumer_burden / total,
            hundred * producer_burden / total,
        )
    } else {
        (T::zero(), T::zero())
    };

    Equilibrium {
        new_quantity,
        consumer_price,
        producer_price,
        consumer_share_pct,
        producer_share_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn constants() -> MarketConstants<f64> {
        MarketConstants::default()
    }

    // ========================================
    // Baseline Tests
    // ========================================

    #[test]
    fn test_zero_tax_reproduces_baseline() {
        let eq = solve(&constants(), 0.0, 1.0, 1.0);
        assert_relative_eq!(eq.new_quantity, 50.0);
        assert_relative_eq!(eq.consumer_price, 50.0);
        assert_relative_eq!(eq.producer_price, 50.0);
        assert_eq!(eq.consumer_share_pct, 0.0);
        assert_eq!(eq.producer_share_pct, 0.0);
    }

    #[test]
    fn test_zero_tax_baseline_for_any_elasticities() {
        for ed in [0.1, 0.5, 1.0, 2.0, 5.0] {
            for es in [0.1, 0.5, 1.0, 2.0, 5.0] {
                let eq = solve(&constants(), 0.0, ed, es);
                assert_relative_eq!(eq.new_quantity, 50.0, epsilon = 1e-12);
                assert_relative_eq!(eq.consumer_price, 50.0, epsilon = 1e-12);
                assert_relative_eq!(eq.producer_price, 50.0, epsilon = 1e-12);
            }
        }
    }

    // ========================================
    // Concrete Scenario Tests
    // ========================================

    #[test]
    fn test_inelastic_supply_scenario() {
        // Ed = 1.0, Es = 0.5: combined = 3, producers bear ~2x the burden.
        let eq = solve(&constants(), 20.0, 1.0, 0.5);
        assert_relative_eq!(eq.new_quantity, 130.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(eq.consumer_price, 170.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(eq.producer_price, 110.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(eq.consumer_share_pct, 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(eq.producer_share_pct, 200.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inelastic_demand_scenario() {
        // Mirror image of the inelastic-supply scenario.
        let eq = solve(&constants(), 20.0, 0.5, 1.0);
        assert_relative_eq!(eq.consumer_share_pct, 200.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(eq.producer_share_pct, 100.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_elasticities_split_evenly() {
        for e in [0.1, 0.5, 1.0, 2.0, 5.0] {
            for tax in [1.0, 10.0, 20.0, 40.0] {
                let eq = solve(&constants(), tax, e, e);
                if eq.new_quantity > 0.0 {
                    assert_relative_eq!(eq.consumer_share_pct, 50.0, epsilon = 1e-9);
                    assert_relative_eq!(eq.producer_share_pct, 50.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_less_elastic_side_bears_more() {
        let eq = solve(&constants(), 20.0, 2.0, 1.0);
        assert!(eq.producer_share_pct > eq.consumer_share_pct);

        let eq = solve(&constants(), 20.0, 1.0, 2.0);
        assert!(eq.consumer_share_pct > eq.producer_share_pct);
    }

    // ========================================
    // Invariant Tests
    // ========================================

    #[test]
    fn test_shares_sum_to_hundred() {
        let eq = solve(&constants(), 15.0, 1.7, 0.3);
        assert_relative_eq!(
            eq.consumer_share_pct + eq.producer_share_pct,
            100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_quantity_non_increasing_in_tax() {
        let mut previous = f64::INFINITY;
        for step in 0..=40 {
            let eq = solve(&constants(), step as f64, 0.8, 1.3);
            assert!(eq.new_quantity <= previous);
            assert!(eq.new_quantity >= 0.0);
            previous = eq.new_quantity;
        }
    }

    #[test]
    fn test_quantity_floors_at_zero() {
        // Tax far beyond what the market can absorb.
        let eq = solve(&constants(), 40.0, 5.0, 5.0);
        assert_eq!(eq.new_quantity, 0.0);
        // Zero traded quantity collapses both shares.
        assert_eq!(eq.consumer_share_pct, 0.0);
        assert_eq!(eq.producer_share_pct, 0.0);
    }

    #[test]
    fn test_producer_price_decreases_with_quantity() {
        let eq = solve(&constants(), 20.0, 1.0, 1.0);
        assert!(eq.consumer_price > 50.0);
        assert!(eq.producer_price < 50.0);
        // The wedge equals the tax while trade persists.
        assert_relative_eq!(eq.consumer_price - eq.producer_price, 20.0, epsilon = 1e-9);
    }

    // ========================================
    // Burden Accessor Tests
    // ========================================

    #[test]
    fn test_burdens_sum_to_revenue() {
        let c = constants();
        let eq = solve(&c, 20.0, 1.0, 0.5);
        let revenue = eq.tax_revenue(&c);
        assert_relative_eq!(
            eq.consumer_burden(&c) + eq.producer_burden(&c),
            revenue,
            epsilon = 1e-9
        );
        // Revenue = tax * quantity while trade persists.
        assert_relative_eq!(revenue, 20.0 * eq.new_quantity, epsilon = 1e-9);
    }

    #[test]
    fn test_revenue_zero_when_trade_eliminated() {
        let c = constants();
        let eq = solve(&c, 40.0, 5.0, 5.0);
        assert_eq!(eq.tax_revenue(&c), 0.0);
    }

    // ========================================
    // Generic Type Tests
    // ========================================

    #[test]
    fn test_with_f32() {
        let c: MarketConstants<f32> = MarketConstants::default();
        let eq = solve(&c, 20.0_f32, 1.0, 0.5);
        assert!((eq.new_quantity - 43.333).abs() < 1e-2);
    }

    // ========================================
    // Property-Based Tests
    // ========================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // Elasticities in the caller-side slider range [0.1, 5.0]
        fn elasticity_strategy() -> impl Strategy<Value = f64> {
            0.1..5.0
        }

        // Tax in the caller-side slider range [0, 40]
        fn tax_strategy() -> impl Strategy<Value = f64> {
            0.0..40.0
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn prop_quantity_is_non_negative(
                tax in tax_strategy(),
                ed in elasticity_strategy(),
                es in elasticity_strategy()
            ) {
                let eq = solve(&MarketConstants::default(), tax, ed, es);
                prop_assert!(eq.new_quantity >= 0.0);
            }

            #[test]
            fn prop_shares_sum_to_hundred_or_zero(
                tax in tax_strategy(),
                ed in elasticity_strategy(),
                es in elasticity_strategy()
            ) {
                let c = MarketConstants::default();
                let eq = solve(&c, tax, ed, es);
                let sum = eq.consumer_share_pct + eq.producer_share_pct;
                if eq.tax_revenue(&c) > 0.0 {
                    prop_assert!((sum - 100.0).abs() < 1e-9,
                        "shares summed to {} for tax={}, ed={}, es={}", sum, tax, ed, es);
                } else {
                    prop_assert_eq!(sum, 0.0);
                }
            }

            #[test]
            fn prop_less_elastic_side_bears_at_least_as_much(
                tax in 1.0..40.0_f64,
                ed in elasticity_strategy(),
                es in elasticity_strategy()
            ) {
                let eq = solve(&MarketConstants::default(), tax, ed, es);
                if eq.new_quantity > 0.0 {
                    if ed < es {
                        prop_assert!(eq.consumer_share_pct > eq.producer_share_pct);
                    } else if es < ed {
                        prop_assert!(eq.producer_share_pct > eq.consumer_share_pct);
                    }
                }
            }

            #[test]
            fn prop_quantity_monotone_in_tax(
                tax in 0.0..39.0_f64,
                ed in elasticity_strategy(),
                es in elasticity_strategy()
            ) {
                let c = MarketConstants::default();
                let lower = solve(&c, tax, ed, es);
                let higher = solve(&c, tax + 1.0, ed, es);
                prop_assert!(higher.new_quantity <= lower.new_quantity);
            }
        }
    }
}
