//! Classifier pipeline
//!
//! Sequences the three model-backed enrichment stages (extract, categorize +
//! prioritize, classify cognitive load) and the deterministic scheduling pass
//! into one run over a transcript. The gateway is an injected dependency,
//! created once per process by the caller; the pipeline itself performs no
//! retries and keeps no partial results - a failed stage discards its output
//! and the caller re-invokes with the original input.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Task, TaskPlan};
use crate::llm::{LlmClient, LlmError};
use crate::parser;
use crate::prompts::{PromptContext, PromptLoader};
use crate::scheduler;

/// The task enrichment pipeline
pub struct TaskPipeline {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
}

impl TaskPipeline {
    /// Create a pipeline over an injected gateway client
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader) -> Self {
        Self { llm, prompts }
    }

    /// Transcribe an audio memo
    pub async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<String, LlmError> {
        self.llm.transcribe(audio, mime_type).await
    }

    /// Stage 1: extract ordered task texts from a transcript
    ///
    /// An empty transcript short-circuits without a gateway call. An empty
    /// result is a valid "nothing actionable" state, not an error.
    pub async fn extract_tasks(&self, transcript: &str) -> Result<Vec<String>, LlmError> {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            debug!("extract_tasks: empty transcript, skipping gateway call");
            return Ok(Vec::new());
        }

        let prompt = self.render("extract-tasks", &PromptContext::from_transcript(transcript))?;
        let response = self.llm.complete(&prompt).await?;
        let tasks = parser::parse_task_lines(&response);
        info!(task_count = tasks.len(), "Extracted tasks from transcript");
        Ok(tasks)
    }

    /// Stage 2: assign category and priority to each task text
    ///
    /// Malformed response lines are dropped by the parser and the affected
    /// tasks reconciled back in with defaults, so the output always contains
    /// every input task.
    pub async fn categorize(&self, texts: &[String]) -> Result<Vec<Task>, LlmError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let context = PromptContext::from_task_texts(texts.iter().map(String::as_str));
        let prompt = self.render("categorize", &context)?;
        let response = self.llm.complete(&prompt).await?;

        let parsed = parser::parse_category_lines(&response);
        let dropped = texts.len().saturating_sub(parsed.len());
        if dropped > 0 {
            debug!(dropped, "categorize: reconciling tasks the model dropped or mangled");
        }

        let reconciled = parser::reconcile_categorized(texts, parsed);
        Ok(reconciled
            .into_iter()
            .map(|line| Task::new(line.text, line.category, line.priority))
            .collect())
    }

    /// Stage 3: fill in cognitive load, matching responses back by exact text
    ///
    /// A record no response line matches keeps the default load. Exact-text
    /// matching tolerates the model reordering or dropping lines, at the cost
    /// of requiring a byte-exact echo of each task text.
    pub async fn classify_load(&self, mut tasks: Vec<Task>) -> Result<Vec<Task>, LlmError> {
        if tasks.is_empty() {
            return Ok(tasks);
        }

        let context = PromptContext::from_task_texts(tasks.iter().map(|task| task.text.as_str()));
        let prompt = self.render("classify-load", &context)?;
        let response = self.llm.complete(&prompt).await?;

        for (text, load) in parser::parse_load_lines(&response) {
            if let Some(task) = tasks.iter_mut().find(|task| task.text == text) {
                task.load = load;
            }
        }
        Ok(tasks)
    }

    /// Run the full pipeline: extract, enrich, then schedule deterministically
    pub async fn run(&self, transcript: &str) -> Result<TaskPlan, LlmError> {
        let texts = self.extract_tasks(transcript).await?;
        if texts.is_empty() {
            return Ok(TaskPlan::empty(transcript));
        }

        let tasks = self.categorize(&texts).await?;
        let mut tasks = self.classify_load(tasks).await?;

        for task in &mut tasks {
            task.bucket = scheduler::bucket_for(task.priority);
        }
        let schedule = scheduler::build_schedule(&tasks);
        let blocks = scheduler::group_into_focus_blocks(&tasks);

        info!(
            task_count = tasks.len(),
            block_count = blocks.len(),
            "Pipeline run complete"
        );

        Ok(TaskPlan {
            transcript: transcript.to_string(),
            tasks,
            schedule,
            blocks,
        })
    }

    fn render(&self, name: &str, context: &PromptContext) -> Result<String, LlmError> {
        // A broken prompt override is a configuration problem, not a backend one.
        self.prompts
            .render(name, context)
            .map_err(|e| LlmError::Configuration(e.to_string()))
    }
}
