/// Transaction records produced by the registry layer.
///
/// The ledger stores these verbatim and never inspects their fields; they
/// only need a canonical byte representation for the block commitment.
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum TransactionRecord {
    #[serde(rename = "NFT_MINT")]
    Mint {
        token_id: String,
        name: String,
        timestamp: String,
    },
    #[serde(rename = "NFT_TRANSFER")]
    Transfer {
        token_id: String,
        from: String,
        to: String,
        timestamp: String,
    },
}

impl TransactionRecord {
    /// Feed the record's canonical bytes into a hasher.
    ///
    /// Fields are domain-tagged and length-prefixed so that distinct
    /// records can never produce the same byte stream.
    pub(crate) fn commit(&self, hasher: &mut Sha256) {
        match self {
            TransactionRecord::Mint {
                token_id,
                name,
                timestamp,
            } => {
                hasher.update(b"mint");
                commit_str(hasher, token_id);
                commit_str(hasher, name);
                commit_str(hasher, timestamp);
            }
            TransactionRecord::Transfer {
                token_id,
                from,
                to,
                timestamp,
            } => {
                hasher.update(b"transfer");
                commit_str(hasher, token_id);
                commit_str(hasher, from);
                commit_str(hasher, to);
                commit_str(hasher, timestamp);
            }
        }
    }
}

fn commit_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
