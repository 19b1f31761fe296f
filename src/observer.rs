//! Ledger event reporting.
//!
//! The core holds an injected observer instead of logging through
//! process-wide state, so it stays independently testable. The default
//! observer forwards to `tracing`.

use crate::block::Block;
use crate::ledger::core::validation::ChainFault;
use tracing::{info, warn};

pub trait LedgerObserver: Send + Sync {
    fn block_sealed(&self, block: &Block);
    fn validation_failed(&self, fault: &ChainFault);
}

/// Forwards ledger events to `tracing`.
#[derive(Debug, Default, Clone)]
pub struct TracingObserver;

impl LedgerObserver for TracingObserver {
    fn block_sealed(&self, block: &Block) {
        info!("Sealed block {} ({})", block.index, block.digest);
    }

    fn validation_failed(&self, fault: &ChainFault) {
        warn!("Chain validation failed: {}", fault);
    }
}

/// Discards all events. Used by `Ledger::clone` and in tests.
#[derive(Debug, Default, Clone)]
pub struct NullObserver;

impl LedgerObserver for NullObserver {
    fn block_sealed(&self, _block: &Block) {}

    fn validation_failed(&self, _fault: &ChainFault) {}
}
