//! Deterministic scheduling
//!
//! Pure functions, no I/O, no model calls: priority decides the day bucket,
//! cognitive load decides the focus-block grouping.

mod blocks;
mod core;

pub use blocks::{MICRO_BATCH_SIZE, group_into_focus_blocks};
pub use core::{bucket_for, build_schedule};
