//! ScrollLedger - an append-only, hash-linked ledger with proof-of-work sealing
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Core Ledger
//! - [`ledger`] - Chain management, pending pool, and validation
//! - [`block`] - Block structure and hash commitment
//! - [`transaction`] - Transaction record types
//!
//! ## Consensus
//! - [`miner`] - Proof-of-work mining
//!
//! ## Registry
//! - [`registry`] - NFT minting, transfers, and collection stats
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//! - [`observer`] - Ledger event reporting

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod block;
pub mod ledger;
pub mod transaction;

// ============================================================================
// Consensus & Mining
// ============================================================================
pub mod miner;

// ============================================================================
// Registry
// ============================================================================
pub mod registry;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
pub mod observer;
