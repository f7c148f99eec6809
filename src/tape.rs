//! The sparse cell store.
//!
//! Addresses are arbitrary signed integers, simulating a tape unbounded in
//! both directions. Cells are created lazily: an address that was never
//! written reads as zero. Nothing is ever evicted; cells accumulate for the
//! life of the owning machine.

use std::collections::HashMap;

use crate::policy::CellPolicy;

#[derive(Debug)]
pub struct Tape {
    cells: HashMap<i64, i64>,
    policy: CellPolicy,
}

impl Tape {
    pub fn new(policy: CellPolicy) -> Self {
        Self {
            cells: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> CellPolicy {
        self.policy
    }

    /// Read a cell; unseen addresses read as zero.
    pub fn get(&self, address: i64) -> i64 {
        self.cells.get(&address).copied().unwrap_or(0)
    }

    /// Store a value, wrapped under the configured policy.
    pub fn set(&mut self, address: i64, value: i64) {
        self.cells.insert(address, self.policy.wrap(value));
    }

    /// Add `delta` to a cell and store the wrapped result.
    pub fn apply_delta(&mut self, address: i64, delta: i64) {
        let next = self.get(address) + delta;
        self.cells.insert(address, self.policy.wrap(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Signedness;

    #[test]
    fn unseen_addresses_read_zero() {
        let tape = Tape::new(CellPolicy::Unbounded);
        assert_eq!(tape.get(0), 0);
        assert_eq!(tape.get(-1_000_000), 0);
        assert_eq!(tape.get(i64::MAX), 0);
    }

    #[test]
    fn negative_addresses_are_ordinary_cells() {
        let mut tape = Tape::new(CellPolicy::Unbounded);
        tape.set(-3, 42);
        assert_eq!(tape.get(-3), 42);
        assert_eq!(tape.get(3), 0);
    }

    #[test]
    fn inc_then_dec_round_trips_under_both_policies() {
        for policy in [CellPolicy::Unbounded, CellPolicy::Byte(Signedness::Unsigned)] {
            let mut tape = Tape::new(policy);
            tape.set(0, 7);
            tape.apply_delta(0, 1);
            tape.apply_delta(0, -1);
            assert_eq!(tape.get(0), 7);
            tape.apply_delta(0, -1);
            tape.apply_delta(0, 1);
            assert_eq!(tape.get(0), 7);
        }
    }

    #[test]
    fn byte_policy_cycles_after_256_increments() {
        let mut tape = Tape::new(CellPolicy::Byte(Signedness::Unsigned));
        tape.set(0, 9);
        for _ in 0..256 {
            tape.apply_delta(0, 1);
        }
        assert_eq!(tape.get(0), 9);
    }

    #[test]
    fn unbounded_policy_never_wraps() {
        let mut tape = Tape::new(CellPolicy::Unbounded);
        tape.set(0, 9);
        for _ in 0..256 {
            tape.apply_delta(0, 1);
        }
        assert_eq!(tape.get(0), 9 + 256);
    }

    #[test]
    fn byte_policy_wraps_below_zero() {
        let mut tape = Tape::new(CellPolicy::Byte(Signedness::Signed));
        tape.apply_delta(0, -1);
        assert_eq!(tape.get(0), 255);
        assert_eq!(tape.policy().display_value(tape.get(0)), -1);
    }

    #[test]
    fn set_applies_the_wrap() {
        let mut tape = Tape::new(CellPolicy::Byte(Signedness::Unsigned));
        tape.set(0, 8364); // '€' read through the byte policy
        assert_eq!(tape.get(0), 8364 % 256);
    }
}
