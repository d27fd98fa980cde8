//! Shared trailer capacity pool

use serde::{Deserialize, Serialize};

/// Per-slot trailer capacity ledger, shared by every row of one balancing run
///
/// Created once before the first row, mutated in strict row-then-slot order,
/// discarded after the run. Invariant: `used[i] <= capacity_per_slot` for
/// every slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCapacityPool {
    capacity_per_slot: u32,
    used: Vec<u32>,
}

impl SlotCapacityPool {
    pub fn new(capacity_per_slot: u32, num_slots: usize) -> Self {
        Self {
            capacity_per_slot,
            used: vec![0; num_slots],
        }
    }

    pub fn capacity_per_slot(&self) -> u32 {
        self.capacity_per_slot
    }

    pub fn num_slots(&self) -> usize {
        self.used.len()
    }

    /// Containers already assigned to a slot across all processed rows
    pub fn used(&self, slot: usize) -> u32 {
        self.used[slot]
    }

    /// Remaining headroom in a slot
    pub fn headroom(&self, slot: usize) -> u32 {
        self.capacity_per_slot.saturating_sub(self.used[slot])
    }

    /// Consume headroom from a slot. Callers must not exceed `headroom(slot)`.
    pub fn consume(&mut self, slot: usize, amount: u32) {
        debug_assert!(amount <= self.headroom(slot));
        self.used[slot] += amount;
    }

    /// Per-slot usage across all processed rows
    pub fn slot_usage(&self) -> &[u32] {
        &self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_pool_has_full_headroom() {
        let pool = SlotCapacityPool::new(96, 4);
        assert_eq!(pool.num_slots(), 4);
        for slot in 0..4 {
            assert_eq!(pool.headroom(slot), 96);
            assert_eq!(pool.used(slot), 0);
        }
    }

    #[test]
    fn test_consume_reduces_headroom() {
        let mut pool = SlotCapacityPool::new(10, 2);
        pool.consume(0, 7);
        assert_eq!(pool.headroom(0), 3);
        assert_eq!(pool.headroom(1), 10);
        pool.consume(0, 3);
        assert_eq!(pool.headroom(0), 0);
        assert_eq!(pool.used(0), 10);
    }

    #[test]
    fn test_zero_capacity_pool_is_always_full() {
        let pool = SlotCapacityPool::new(0, 3);
        for slot in 0..3 {
            assert_eq!(pool.headroom(slot), 0);
        }
    }
}
