//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod change;
pub mod error;
pub mod name;

pub use change::StockChange;
pub use error::{DomainError, DomainResult};
pub use name::ItemName;
