//! In-memory result of one pipeline run

use serde::{Deserialize, Serialize};

use super::schedule::{FocusBlock, Schedule};
use super::task::Task;

/// Everything one pipeline run produced for a transcript
///
/// This is the bundle the CLI renders and the store persists. The durable
/// counterpart lives in `planstore`; this type only guarantees that each of
/// its artifact collections serializes independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPlan {
    pub transcript: String,
    pub tasks: Vec<Task>,
    pub schedule: Schedule,
    pub blocks: Vec<FocusBlock>,
}

impl TaskPlan {
    /// A plan with no actionable tasks
    ///
    /// A valid "nothing actionable found" state, distinct from any failure.
    pub fn empty(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            tasks: Vec::new(),
            schedule: Schedule::default(),
            blocks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
