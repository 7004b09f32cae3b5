//! Prompt loader
//!
//! Loads prompt templates from override files or falls back to embedded
//! defaults, and renders them with the stage context.

use std::path::PathBuf;

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;

/// Context for rendering prompt templates
#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptContext {
    /// Raw transcript (extraction stage)
    pub transcript: String,
    /// Numbered task list (categorization and load stages)
    pub task_list: String,
}

impl PromptContext {
    /// Context for the extraction stage
    pub fn from_transcript(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            task_list: String::new(),
        }
    }

    /// Context for the task-list stages, numbered the way the model sees it
    pub fn from_task_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let task_list = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| format!("{}. {}", i + 1, text))
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            transcript: String::new(),
            task_list,
        }
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine (raw rendering; transcripts are not HTML)
    hbs: Handlebars<'static>,
    /// Project-local override directory (`.voiceplan/prompts/`)
    local_dir: Option<PathBuf>,
    /// User override directory (`~/.config/voiceplan/prompts/`)
    user_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader checking project-local then user override directories
    pub fn new() -> Self {
        let local_dir = PathBuf::from(".voiceplan/prompts");
        let user_dir = dirs::config_dir().map(|d| d.join("voiceplan").join("prompts"));

        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);

        Self {
            hbs,
            local_dir: if local_dir.exists() { Some(local_dir) } else { None },
            user_dir: user_dir.filter(|d| d.exists()),
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        Self {
            hbs,
            local_dir: None,
            user_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. Project override: `.voiceplan/prompts/{name}.pmt`
    /// 2. User override: `~/.config/voiceplan/prompts/{name}.pmt`
    /// 3. Embedded fallback
    pub fn load(&self, name: &str) -> Result<String> {
        for dir in [&self.local_dir, &self.user_dir].into_iter().flatten() {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(path = %path.display(), "Loading prompt override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "Using embedded prompt");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, name: &str, context: &PromptContext) -> Result<String> {
        let template = self.load(name)?;
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", name, e))
    }
}

impl Default for PromptLoader {
    fn default() -> Self {
        Self::new()
    }
}
