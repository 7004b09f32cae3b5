//! Voiceplan - voice memos to triaged, time-boxed task plans
//!
//! Voiceplan is a thin orchestration layer over a generative-language
//! backend: audio goes in and a transcript comes out; the transcript goes
//! through three model-backed enrichment stages; a deterministic scheduler
//! then assigns day buckets and groups focus blocks. The deterministic
//! post-processing is the load-bearing part - strict line parsing, silent
//! repair of malformed model output, and reconciliation guarantee that model
//! variance never corrupts the user-visible plan.
//!
//! # Modules
//!
//! - [`llm`] - gateway trait, Gemini client, error taxonomy
//! - [`parser`] - line-oriented response parsing and reconciliation
//! - [`pipeline`] - the three-stage enrichment pipeline
//! - [`scheduler`] - priority-to-bucket mapping and focus-block grouping
//! - [`domain`] - task record, enums, schedule, plan bundle
//! - [`prompts`] - embedded templates with file overrides
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod demo;
pub mod domain;
pub mod llm;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod scheduler;

// Re-export commonly used types
pub use config::{Config, LlmConfig, StorageConfig};
pub use domain::{Category, CognitiveLoad, FocusBlock, Priority, Schedule, ScheduleBucket, Task, TaskPlan};
pub use llm::{GeminiClient, LlmClient, LlmError, create_client};
pub use pipeline::TaskPipeline;
pub use prompts::{PromptContext, PromptLoader};
