//! Per-terminal ampere-turn percentage contributions.

use cs_core::{NUM_TERMINAL_SLOTS, TermSlot};

/// The six per-terminal ampere-turn percentage contributions.
///
/// Every write clamps to [-100, 100]. The design is balanced when the six
/// entries sum to exactly 0.0, with no tolerance, so a design only reports
/// balanced after an explicit [`AmpTurns::balance`] (or hand entry that
/// cancels exactly). Addressed by [`TermSlot`] like the terminal slots they
/// describe.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmpTurns {
    percentages: [f64; NUM_TERMINAL_SLOTS],
}

impl AmpTurns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: TermSlot) -> f64 {
        self.percentages[slot.index()]
    }

    /// Set one entry, clamped to [-100, 100].
    pub fn set(&mut self, slot: TermSlot, pct: f64) {
        self.percentages[slot.index()] = pct.clamp(-100.0, 100.0);
    }

    /// Current imbalance and whether the distribution is balanced.
    pub fn check_balance(&self) -> (f64, bool) {
        let sum: f64 = self.percentages.iter().sum();
        (sum, sum == 0.0)
    }

    /// Absorb the entire imbalance into one entry so the sum becomes exactly
    /// 0.0. No-op when already balanced.
    pub fn balance(&mut self, slot: TermSlot) {
        let (sum, balanced) = self.check_balance();
        if balanced {
            return;
        }
        self.percentages[slot.index()] -= sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: u8) -> TermSlot {
        TermSlot::new(n).unwrap()
    }

    #[test]
    fn writes_clamp_to_plus_minus_100() {
        let mut at = AmpTurns::new();
        at.set(slot(1), 250.0);
        at.set(slot(2), -250.0);
        at.set(slot(3), 42.5);
        assert_eq!(at.get(slot(1)), 100.0);
        assert_eq!(at.get(slot(2)), -100.0);
        assert_eq!(at.get(slot(3)), 42.5);
    }

    #[test]
    fn balance_zeroes_the_sum_in_one_step() {
        let mut at = AmpTurns::new();
        at.set(slot(1), 60.0);
        at.set(slot(2), -25.0);
        at.set(slot(3), -25.0);

        let (sum, balanced) = at.check_balance();
        assert_eq!(sum, 10.0);
        assert!(!balanced);

        at.balance(slot(1));
        let (sum, balanced) = at.check_balance();
        assert_eq!(sum, 0.0);
        assert!(balanced);
        assert_eq!(at.get(slot(1)), 50.0);
    }

    #[test]
    fn balance_is_a_noop_when_already_balanced() {
        let mut at = AmpTurns::new();
        at.set(slot(1), 100.0);
        at.set(slot(2), -100.0);
        assert!(at.check_balance().1);

        let before = at;
        at.balance(slot(4));
        assert_eq!(at, before);
    }

    #[test]
    fn near_zero_is_not_balanced() {
        let mut at = AmpTurns::new();
        at.set(slot(1), 0.1);
        at.set(slot(2), 0.2);
        at.set(slot(3), -0.3);
        // 0.1 + 0.2 - 0.3 != 0.0 in binary floating point.
        let (sum, balanced) = at.check_balance();
        assert_ne!(sum, 0.0);
        assert!(!balanced);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_write_lands_in_range(n in 1u8..=6, pct in -1e6_f64..1e6) {
            let mut at = AmpTurns::new();
            let slot = TermSlot::new(n).unwrap();
            at.set(slot, pct);
            prop_assert!((-100.0..=100.0).contains(&at.get(slot)));
        }

        // Eighths of a percent are exactly representable, so sums and the
        // balancing subtraction stay exact and the == 0.0 check is meaningful.
        #[test]
        fn balance_always_yields_exact_zero(
            eighths in proptest::array::uniform6(-800_i32..=800),
            target in 1u8..=6,
        ) {
            let mut at = AmpTurns::new();
            for (i, v) in eighths.into_iter().enumerate() {
                at.set(TermSlot::new(i as u8 + 1).unwrap(), f64::from(v) / 8.0);
            }
            at.balance(TermSlot::new(target).unwrap());
            let (sum, balanced) = at.check_balance();
            prop_assert_eq!(sum, 0.0);
            prop_assert!(balanced);

            // Balanced state is a fixed point.
            let before = at;
            at.balance(TermSlot::new(target).unwrap());
            prop_assert_eq!(at, before);
        }
    }
}
