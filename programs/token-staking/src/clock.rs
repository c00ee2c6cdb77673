use anchor_lang::prelude::*;

/// Source of the ledger's monotonic slot counter.
pub trait SlotClock {
    fn current_slot(&self) -> u64;
}

impl SlotClock for Clock {
    fn current_slot(&self) -> u64 {
        self.slot
    }
}
