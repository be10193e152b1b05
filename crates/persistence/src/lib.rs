//! Filesystem persistence for the inventory store.
//!
//! All IO lives here; the domain crates stay pure. The on-disk format is a
//! single flat JSON object mapping item names to quantities.

pub mod snapshot;

pub use snapshot::{SnapshotError, load, save};
