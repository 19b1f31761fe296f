use crate::block::{Block, GENESIS_PREVIOUS_DIGEST};
use crate::miner::meets_difficulty;
use std::fmt;

/// First integrity violation found while scanning a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainFault {
    BadGenesisAnchor,
    DigestMismatch { index: u64 },
    BelowDifficulty { index: u64 },
    BrokenLink { index: u64 },
}

impl fmt::Display for ChainFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainFault::BadGenesisAnchor => {
                write!(f, "Genesis block does not anchor to the '{}' sentinel", GENESIS_PREVIOUS_DIGEST)
            }
            ChainFault::DigestMismatch { index } => {
                write!(f, "Block {} digest does not match its field values", index)
            }
            ChainFault::BelowDifficulty { index } => {
                write!(f, "Block {} digest does not meet the difficulty target", index)
            }
            ChainFault::BrokenLink { index } => {
                write!(f, "Block {} does not link to its predecessor's digest", index)
            }
        }
    }
}

/// Walk the whole chain and re-derive every invariant: genesis anchor,
/// digest integrity, difficulty target, and link continuity.
///
/// Read-only; stops at the first violation.
pub fn verify_chain(blocks: &[Block], difficulty: usize) -> Result<(), ChainFault> {
    if let Some(genesis) = blocks.first() {
        if genesis.previous_digest != GENESIS_PREVIOUS_DIGEST {
            return Err(ChainFault::BadGenesisAnchor);
        }
    }

    for (i, block) in blocks.iter().enumerate() {
        if block.digest != block.compute_digest() {
            return Err(ChainFault::DigestMismatch { index: block.index });
        }
        if !meets_difficulty(&block.digest, difficulty) {
            return Err(ChainFault::BelowDifficulty { index: block.index });
        }
        if i > 0 && block.previous_digest != blocks[i - 1].digest {
            return Err(ChainFault::BrokenLink { index: block.index });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Payload;
    use crate::miner::mine_block;

    fn tiny_chain() -> Vec<Block> {
        let genesis = mine_block(
            Block::new_at(
                0,
                1_000,
                Payload::Marker("genesis".to_string()),
                GENESIS_PREVIOUS_DIGEST.to_string(),
            ),
            0,
        );
        let next = mine_block(
            Block::new_at(
                1,
                2_000,
                Payload::Marker("next".to_string()),
                genesis.digest.clone(),
            ),
            0,
        );
        vec![genesis, next]
    }

    #[test]
    fn test_consistent_chain_verifies() {
        assert_eq!(verify_chain(&tiny_chain(), 0), Ok(()));
    }

    #[test]
    fn test_empty_chain_verifies() {
        assert_eq!(verify_chain(&[], 3), Ok(()));
    }

    #[test]
    fn test_bad_genesis_anchor_detected() {
        let mut blocks = tiny_chain();
        blocks[0].previous_digest = "1".to_string();
        blocks[0].digest = blocks[0].compute_digest();
        assert_eq!(verify_chain(&blocks, 0), Err(ChainFault::BadGenesisAnchor));
    }

    #[test]
    fn test_stale_digest_detected() {
        let mut blocks = tiny_chain();
        blocks[1].nonce += 1;
        assert_eq!(
            verify_chain(&blocks, 0),
            Err(ChainFault::DigestMismatch { index: 1 })
        );
    }

    #[test]
    fn test_broken_link_detected() {
        let mut blocks = tiny_chain();
        // Re-derive a consistent digest over a forged predecessor link.
        blocks[1].previous_digest = "ff".repeat(32);
        blocks[1].digest = blocks[1].compute_digest();
        assert_eq!(
            verify_chain(&blocks, 0),
            Err(ChainFault::BrokenLink { index: 1 })
        );
    }

    #[test]
    fn test_unmined_block_detected() {
        let blocks = tiny_chain();
        // The digests were mined at difficulty 0, so a real target fails.
        assert!(matches!(
            verify_chain(&blocks, 4),
            Err(ChainFault::BelowDifficulty { .. })
        ));
    }
}
