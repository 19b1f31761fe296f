//! NFT registry: a thin client of the ledger.
//!
//! The registry keeps its own token bookkeeping (id generation, ownership
//! map) and talks to the ledger only through `submit` and `seal`, reading
//! back block receipts to correlate its records with ledger positions.

use crate::error::{LedgerError, Result};
use crate::ledger::{BlockReceipt, Ledger};
use crate::transaction::TransactionRecord;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::info;

/// Owner assigned to freshly minted tokens.
pub const DEFAULT_HOUSE_OWNER: &str = "ScrollVerse";

/// Token id length in hex characters.
const TOKEN_ID_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Nft {
    pub token_id: String,
    pub name: String,
    pub metadata: serde_json::Value,
    pub owner: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CollectionStats {
    pub total_minted: u64,
    pub unique_tokens: usize,
    pub ledger_blocks: usize,
    pub pending_records: usize,
}

pub struct NftRegistry {
    ledger: Ledger,
    nfts: HashMap<String, Nft>,
    total_minted: u64,
    house_owner: String,
}

impl NftRegistry {
    /// Create a registry over a fresh ledger mined at `difficulty`.
    pub fn new(difficulty: usize) -> Result<Self> {
        Ok(Self::with_ledger(Ledger::new(difficulty)?, DEFAULT_HOUSE_OWNER))
    }

    pub fn with_ledger(ledger: Ledger, house_owner: &str) -> Self {
        NftRegistry {
            ledger,
            nfts: HashMap::new(),
            total_minted: 0,
            house_owner: house_owner.to_string(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Mint a new token and queue its record for the next seal.
    pub fn mint(&mut self, name: &str, metadata: serde_json::Value) -> Nft {
        let timestamp = chrono::Utc::now().to_rfc3339();
        let token_id = derive_token_id(name, self.total_minted, &timestamp);

        let nft = Nft {
            token_id: token_id.clone(),
            name: name.to_string(),
            metadata,
            owner: self.house_owner.clone(),
            created_at: timestamp.clone(),
        };
        self.nfts.insert(token_id.clone(), nft.clone());
        self.total_minted += 1;

        self.ledger.submit(TransactionRecord::Mint {
            token_id: token_id.clone(),
            name: name.to_string(),
            timestamp,
        });

        info!("Minted NFT {} ({})", token_id, name);
        nft
    }

    pub fn nft(&self, token_id: &str) -> Option<&Nft> {
        self.nfts.get(token_id)
    }

    /// Move a token to a new owner and queue the transfer record.
    pub fn transfer(&mut self, token_id: &str, new_owner: &str) -> Result<()> {
        let nft = self
            .nfts
            .get_mut(token_id)
            .ok_or_else(|| LedgerError::TokenNotFound(token_id.to_string()))?;

        let old_owner = std::mem::replace(&mut nft.owner, new_owner.to_string());
        self.ledger.submit(TransactionRecord::Transfer {
            token_id: token_id.to_string(),
            from: old_owner.clone(),
            to: new_owner.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        info!("Transferred {} from {} to {}", token_id, old_owner, new_owner);
        Ok(())
    }

    /// Seal every pending record into a block. `None` when there is nothing
    /// to seal; the caller must not treat that as an error.
    pub fn immortalize(&mut self) -> Option<BlockReceipt> {
        self.ledger.seal()
    }

    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            total_minted: self.total_minted,
            unique_tokens: self.nfts.len(),
            ledger_blocks: self.ledger.blocks.len(),
            pending_records: self.ledger.pending.len(),
        }
    }
}

/// Derive a token id from the name, the mint ordinal, and the mint time.
fn derive_token_id(name: &str, ordinal: u64, timestamp: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}_{}_{}", name, ordinal, timestamp).as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(TOKEN_ID_LEN);
    id
}
