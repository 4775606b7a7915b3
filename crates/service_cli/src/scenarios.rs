//! Named teaching scenarios.
//!
//! Plain configuration data: each scenario seeds the caller-owned
//! [`MarketParameters`] and tells an interactive front end which controls
//! to lock while the scenario is active. Opaque to the kernel.
//!
//! [`MarketParameters`]: incidence_core::market::MarketParameters

use incidence_core::market::{MarketParameters, TaxTarget};

/// One teaching preset.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Stable lookup key
    pub name: &'static str,
    /// Short display title
    pub title: &'static str,
    /// What the scenario demonstrates
    pub description: &'static str,
    /// Side of the market the tax is levied on
    pub target: TaxTarget,
    /// Price-elasticity of demand
    pub ed: f64,
    /// Price-elasticity of supply
    pub es: f64,
    /// Per-unit tax amount
    pub tax_amount: f64,
    /// Front-end lock: tax target fixed while active
    pub lock_target: bool,
    /// Front-end lock: demand elasticity fixed while active
    pub lock_ed: bool,
    /// Front-end lock: supply elasticity fixed while active
    pub lock_es: bool,
}

impl Scenario {
    /// Build the initial market parameters this scenario seeds.
    pub fn parameters(&self) -> MarketParameters<f64> {
        MarketParameters::new(self.tax_amount, self.ed, self.es, self.target)
    }
}

/// The scenario table, in display order.
pub const SCENARIOS: [Scenario; 5] = [
    Scenario {
        name: "consumer_low_demand",
        title: "Scenario 1",
        description: "Tax on consumers, inelastic demand: buyers bear most of the burden",
        target: TaxTarget::Consumer,
        ed: 0.5,
        es: 1.0,
        tax_amount: 20.0,
        lock_target: true,
        lock_ed: false,
        lock_es: true,
    },
    Scenario {
        name: "consumer_high_supply",
        title: "Scenario 2",
        description: "Tax on consumers, elastic supply: buyers still bear most of the burden",
        target: TaxTarget::Consumer,
        ed: 1.0,
        es: 2.0,
        tax_amount: 20.0,
        lock_target: true,
        lock_ed: true,
        lock_es: false,
    },
    Scenario {
        name: "producer_high_demand",
        title: "Scenario 3",
        description: "Tax on producers, elastic demand: sellers bear most of the burden",
        target: TaxTarget::Producer,
        ed: 2.0,
        es: 1.0,
        tax_amount: 20.0,
        lock_target: true,
        lock_ed: false,
        lock_es: true,
    },
    Scenario {
        name: "producer_low_supply",
        title: "Scenario 4",
        description: "Tax on producers, inelastic supply: sellers bear most of the burden",
        target: TaxTarget::Producer,
        ed: 1.0,
        es: 0.5,
        tax_amount: 20.0,
        lock_target: true,
        lock_ed: true,
        lock_es: false,
    },
    Scenario {
        name: "custom",
        title: "Custom",
        description: "Free choice of tax target and elasticity parameters",
        target: TaxTarget::Producer,
        ed: 1.0,
        es: 1.0,
        tax_amount: 20.0,
        lock_target: false,
        lock_ed: false,
        lock_es: false,
    },
];

/// Look up a scenario by its stable name.
pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}
