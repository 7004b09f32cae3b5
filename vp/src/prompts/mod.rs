//! Prompt templates for the pipeline stages
//!
//! Embedded defaults with file-based overrides, rendered per stage.

pub mod embedded;
mod loader;

pub use loader::{PromptContext, PromptLoader};
