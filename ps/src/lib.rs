//! PlanStore - durable storage for accounts and saved task plans
//!
//! A saved plan is an immutable snapshot: the transcript plus four serialized
//! artifact blobs (tasks, prioritized tasks, schedule, focus blocks), owned by
//! exactly one account. The store treats the artifact serialization format as
//! opaque; it only validates the blobs structurally when a plan is loaded
//! back.
//!
//! # Modules
//!
//! - [`store`] - SQLite-backed store, account and plan row types, errors

pub mod store;

pub use store::{Account, PlanArtifacts, PlanStore, SavedPlan, StoreError};
