//! Transaction record types, split out so the ledger core stays payload-agnostic

pub mod types;

pub use types::*;
