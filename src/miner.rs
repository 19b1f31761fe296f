//! Proof-of-work nonce search.

use crate::block::Block;
use tracing::info;

/// True when `digest` starts with at least `difficulty` `'0'` hex characters.
pub fn meets_difficulty(digest: &str, difficulty: usize) -> bool {
    difficulty <= digest.len() && digest.as_bytes()[..difficulty].iter().all(|&b| b == b'0')
}

/// Search for a nonce whose digest satisfies the difficulty target.
///
/// Starts from the block's current nonce and increments until the target is
/// met. Unbounded: expected cost grows as 16^difficulty digest evaluations,
/// and that cost is the point. Difficulty 0 accepts the first digest.
///
/// Consumes the candidate and returns the sealed block; sealed blocks are
/// never mutated again.
pub fn mine_block(mut block: Block, difficulty: usize) -> Block {
    block.digest = block.compute_digest();
    while !meets_difficulty(&block.digest, difficulty) {
        block.nonce += 1;
        block.digest = block.compute_digest();
    }
    info!("Block {} mined: {}", block.index, block.digest);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Payload, GENESIS_PREVIOUS_DIGEST};

    fn candidate() -> Block {
        Block::new_at(
            1,
            1_700_000_000_000,
            Payload::Marker("candidate".to_string()),
            GENESIS_PREVIOUS_DIGEST.to_string(),
        )
    }

    #[test]
    fn test_difficulty_zero_accepts_first_digest() {
        let before = candidate();
        let mined = mine_block(before.clone(), 0);
        assert_eq!(mined.nonce, before.nonce);
        assert_eq!(mined.digest, before.digest);
    }

    #[test]
    fn test_mined_digest_meets_target() {
        let mined = mine_block(candidate(), 2);
        assert!(mined.digest.starts_with("00"));
        assert_eq!(mined.digest, mined.compute_digest());
    }

    #[test]
    fn test_meets_difficulty_prefix_check() {
        assert!(meets_difficulty("00ab", 2));
        assert!(!meets_difficulty("0ab0", 2));
        assert!(meets_difficulty("anything", 0));
        // A target longer than the digest is unsatisfiable.
        assert!(!meets_difficulty("0000", 5));
    }
}
