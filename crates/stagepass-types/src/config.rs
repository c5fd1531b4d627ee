//! Configuration for the deployment orchestrator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{COST_PRECISION, SLOTS_PER_TICKET};
use crate::Address;

/// Fee schedule for computing the up-front deployment cost.
///
/// `deployment_cost` is deterministic and monotonically non-decreasing in
/// supply; the payment verifier checks the organizer's payment against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSchedule {
    /// Fixed cost per deployment: the collection mint plus base overhead.
    pub base_fee: Decimal,
    /// Cost per ticket mint (slot reserve plus submission fee).
    pub per_mint_fee: Decimal,
    /// Cost per sell-listing (slot reserve plus submission fee).
    pub per_offer_fee: Decimal,
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self {
            base_fee: Decimal::ONE,               // 1 unit
            per_mint_fee: Decimal::new(25, 2),    // 0.25 units
            per_offer_fee: Decimal::new(1, 1),    // 0.1 units
        }
    }
}

impl CostSchedule {
    /// Total cost of deploying an event with `max_supply` tickets,
    /// rounded to [`COST_PRECISION`] decimal places.
    #[must_use]
    pub fn deployment_cost(&self, max_supply: u32) -> Decimal {
        let supply = Decimal::from(max_supply);
        let total = self.base_fee + supply * (self.per_mint_fee + self.per_offer_fee);
        total.round_dp(COST_PRECISION)
    }
}

/// Configuration for one deployment orchestrator instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// The operating account: destination of organizer payments, signer of
    /// every deployment operation, and owner of the minted tokens. The
    /// single shared resource — see the slot pool for how contention is
    /// avoided within one run.
    pub operating_address: Address,
    /// Fee schedule used for cost computation and payment verification.
    pub cost: CostSchedule,
}

impl DeployConfig {
    #[must_use]
    pub fn new(operating_address: Address) -> Self {
        Self {
            operating_address,
            cost: CostSchedule::default(),
        }
    }
}

/// Slots required for a deployment: one per mint plus one per offer.
#[must_use]
pub fn required_slots(max_supply: u32) -> u32 {
    max_supply * SLOTS_PER_TICKET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_deterministic() {
        let schedule = CostSchedule::default();
        assert_eq!(schedule.deployment_cost(50), schedule.deployment_cost(50));
    }

    #[test]
    fn cost_is_monotone_in_supply() {
        let schedule = CostSchedule::default();
        let mut previous = schedule.deployment_cost(0);
        for supply in 1..200 {
            let cost = schedule.deployment_cost(supply);
            assert!(cost >= previous, "cost decreased at supply {supply}");
            previous = cost;
        }
    }

    #[test]
    fn cost_formula_for_three_tickets() {
        // base 1 + 3 * (0.25 + 0.1) = 2.05
        let schedule = CostSchedule::default();
        assert_eq!(schedule.deployment_cost(3), Decimal::new(205, 2));
    }

    #[test]
    fn cost_rounded_to_fixed_precision() {
        let schedule = CostSchedule {
            base_fee: Decimal::ZERO,
            per_mint_fee: Decimal::new(12_345_678, 8), // 0.12345678
            per_offer_fee: Decimal::ZERO,
        };
        assert_eq!(schedule.deployment_cost(1), Decimal::new(123_457, 6));
        assert!(schedule.deployment_cost(1).scale() <= COST_PRECISION);
    }

    #[test]
    fn required_slots_is_twice_supply() {
        assert_eq!(required_slots(3), 6);
        assert_eq!(required_slots(0), 0);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = DeployConfig::new(Address::new("rOperator"));
        let json = serde_json::to_string(&cfg).unwrap();
        let back: DeployConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.operating_address, back.operating_address);
        assert_eq!(cfg.cost.base_fee, back.cost.base_fee);
    }
}
