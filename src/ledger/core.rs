//! Ledger core: the ordered chain, the pending pool, and the sealing path.

pub mod validation;

use crate::block::{Block, Payload, DIGEST_HEX_LEN, GENESIS_PREVIOUS_DIGEST};
use crate::error::{LedgerError, Result};
use crate::miner::mine_block;
use crate::observer::{LedgerObserver, NullObserver, TracingObserver};
use crate::transaction::TransactionRecord;
use tracing::info;

/// Marker payload carried by every genesis block.
pub const GENESIS_MARKER: &str = "Genesis Block - ScrollLedger Eternal";

/// Caller-facing summary of a freshly sealed block.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BlockReceipt {
    pub index: u64,
    pub digest: String,
    /// Number of transaction records sealed into the block (0 for markers).
    pub records: usize,
}

/// Snapshot of the ledger's externally observable state.
///
/// `valid` re-runs the full chain scan on every call; chains here are small
/// and local, so correctness wins over caching.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChainInfo {
    pub length: usize,
    pub valid: bool,
    pub difficulty: usize,
    pub pending_count: usize,
    pub latest_digest: String,
}

/// Single-writer, in-memory ledger.
///
/// All mutation goes through `&mut self`, so exclusive access is enforced by
/// the borrow checker; callers that share a ledger across tasks wrap it in
/// `Arc<RwLock<_>>` at their own layer.
pub struct Ledger {
    pub blocks: Vec<Block>,
    pub pending: Vec<TransactionRecord>,
    pub difficulty: usize,
    observer: Box<dyn LedgerObserver>,
}

impl Clone for Ledger {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            pending: self.pending.clone(),
            difficulty: self.difficulty,
            // Observers cannot be cloned as trait objects; clones are silent.
            observer: Box::new(NullObserver),
        }
    }
}

impl Ledger {
    /// Create a ledger reporting events through `tracing`, with the genesis
    /// block mined and appended before this returns.
    pub fn new(difficulty: usize) -> Result<Self> {
        Self::with_options(difficulty, GENESIS_MARKER, Box::new(TracingObserver))
    }

    /// Create a ledger with a custom genesis marker and observer.
    pub fn with_options(
        difficulty: usize,
        genesis_marker: &str,
        observer: Box<dyn LedgerObserver>,
    ) -> Result<Self> {
        if difficulty > DIGEST_HEX_LEN {
            return Err(LedgerError::InvalidDifficulty(difficulty));
        }

        let genesis = mine_block(
            Block::new(
                0,
                Payload::Marker(genesis_marker.to_string()),
                GENESIS_PREVIOUS_DIGEST.to_string(),
            ),
            difficulty,
        );

        let mut ledger = Ledger {
            blocks: Vec::new(),
            pending: Vec::new(),
            difficulty,
            observer,
        };
        ledger.observer.block_sealed(&genesis);
        ledger.blocks.push(genesis);
        info!("Genesis block created");
        Ok(ledger)
    }

    /// Most recent block. The constructor installs genesis, so the chain is
    /// never empty.
    pub fn latest(&self) -> &Block {
        self.blocks
            .last()
            .expect("genesis block present since construction")
    }

    /// Queue a transaction record for the next seal. Records are opaque to
    /// the ledger; this cannot fail.
    pub fn submit(&mut self, record: TransactionRecord) {
        self.pending.push(record);
    }

    /// Drain the pending pool into a new mined block.
    ///
    /// Returns `None` without touching any state when the pool is empty; an
    /// empty block is never produced.
    pub fn seal(&mut self) -> Option<BlockReceipt> {
        if self.pending.is_empty() {
            return None;
        }

        let records = std::mem::take(&mut self.pending);
        let count = records.len();
        Some(self.mine_and_append(Payload::Batch { records, count }))
    }

    /// Mine and append a block over a caller-supplied payload, bypassing the
    /// pending pool.
    pub fn append_raw(&mut self, payload: Payload) -> BlockReceipt {
        self.mine_and_append(payload)
    }

    /// Re-derive every chain invariant; `false` on the first violation.
    ///
    /// Tampering surfaces here as a boolean, never as a panic: a caller must
    /// be able to detect and report corruption without crashing.
    pub fn validate(&self) -> bool {
        match validation::verify_chain(&self.blocks, self.difficulty) {
            Ok(()) => true,
            Err(fault) => {
                self.observer.validation_failed(&fault);
                false
            }
        }
    }

    pub fn info(&self) -> ChainInfo {
        ChainInfo {
            length: self.blocks.len(),
            valid: self.validate(),
            difficulty: self.difficulty,
            pending_count: self.pending.len(),
            latest_digest: self.latest().digest.clone(),
        }
    }

    fn mine_and_append(&mut self, payload: Payload) -> BlockReceipt {
        let (previous_digest, previous_timestamp) = {
            let previous = self.latest();
            (previous.digest.clone(), previous.timestamp)
        };

        let mut candidate = Block::new(self.blocks.len() as u64, payload, previous_digest);
        if candidate.timestamp <= previous_timestamp {
            candidate.timestamp = previous_timestamp + 1;
        }

        let sealed = mine_block(candidate, self.difficulty);
        let receipt = BlockReceipt {
            index: sealed.index,
            digest: sealed.digest.clone(),
            records: sealed.payload.record_count(),
        };
        self.observer.block_sealed(&sealed);
        self.blocks.push(sealed);
        receipt
    }
}
