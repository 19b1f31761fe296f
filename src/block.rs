//! Block structure and hash commitment.
//!
//! A block commits to its payload and predecessor through a SHA-256 digest
//! over every field that matters for integrity. The digest is the block's
//! fingerprint on the chain; validation re-derives it from scratch.

use crate::transaction::TransactionRecord;
use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Sentinel predecessor digest carried by the genesis block.
pub const GENESIS_PREVIOUS_DIGEST: &str = "0";

/// What a block carries.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// Human-readable entry, used by the genesis block and direct appends.
    Marker(String),
    /// A batch of transaction records drained from the pending pool.
    Batch {
        records: Vec<TransactionRecord>,
        count: usize,
    },
}

impl Payload {
    /// Number of transaction records carried by this payload.
    pub fn record_count(&self) -> usize {
        match self {
            Payload::Marker(_) => 0,
            Payload::Batch { records, .. } => records.len(),
        }
    }

    /// Feed the payload's canonical byte representation into a hasher.
    ///
    /// Each variant is domain-tagged so a marker can never collide with a
    /// batch that happens to serialize to the same bytes.
    pub(crate) fn commit(&self, hasher: &mut Sha256) {
        match self {
            Payload::Marker(text) => {
                hasher.update(b"marker");
                hasher.update(text.as_bytes());
            }
            Payload::Batch { records, count } => {
                hasher.update(b"batch");
                hasher.update((*count as u64).to_le_bytes());
                for record in records {
                    record.commit(hasher);
                }
            }
        }
    }
}

/// Compute the digest committing to a block's field values.
///
/// Pure function: identical inputs always produce the same lowercase
/// 64-character hex string.
pub fn commit_digest(
    index: u64,
    timestamp: u64,
    payload: &Payload,
    previous_digest: &str,
    nonce: u64,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(index.to_le_bytes());
    hasher.update(timestamp.to_le_bytes());
    payload.commit(&mut hasher);
    hasher.update(previous_digest.as_bytes());
    hasher.update(nonce.to_le_bytes());
    hex::encode(hasher.finalize())
}

/// One ledger entry.
///
/// Blocks are mined before they are ever appended; once on the chain they
/// are never mutated again.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Block {
    pub index: u64,
    /// Wall-clock milliseconds at creation.
    pub timestamp: u64,
    pub payload: Payload,
    pub previous_digest: String,
    pub nonce: u64,
    pub digest: String,
}

impl Block {
    pub fn new(index: u64, payload: Payload, previous_digest: String) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis() as u64;
        Self::new_at(index, timestamp, payload, previous_digest)
    }

    pub fn new_at(index: u64, timestamp: u64, payload: Payload, previous_digest: String) -> Self {
        let mut block = Block {
            index,
            timestamp,
            payload,
            previous_digest,
            nonce: 0,
            digest: String::new(),
        };
        block.digest = block.compute_digest();
        block
    }

    /// Re-derive the digest from the block's current field values.
    pub fn compute_digest(&self) -> String {
        commit_digest(
            self.index,
            self.timestamp,
            &self.payload,
            &self.previous_digest,
            self.nonce,
        )
    }
}
