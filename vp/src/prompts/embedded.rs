//! Embedded fallback prompts
//!
//! These are compiled into the binary and used when template files are not
//! found. Placeholders are handlebars variables filled by the loader.

/// Fixed instruction for audio transcription: faithful text, nothing added
pub const TRANSCRIBE: &str =
    "Transcribe this audio to clean readable English text. No summarizing. No invention. Pure transcription only.";

/// Stage 1: transcript to one task per line
pub const EXTRACT_TASKS: &str = r#"Extract actionable tasks from this transcript.
Rules:
- Start with a verb
- Short
- No feelings
- No summaries
- No filler
Output each task on its own line.

Transcript:
{{transcript}}"#;

/// Stage 2: task texts to category and priority triples
pub const CATEGORIZE: &str = r#"For each task, assign category and priority.

Categories: Work, Study, Errand, Personal, Health, Finance, Other
Priorities: Urgent & Important, Urgent & Not Important, Important & Not Urgent, Not Urgent & Not Important

Output format (one per line):
<task> || <category> || <priority>

Tasks:
{{task_list}}"#;

/// Stage 3: task texts to cognitive-load pairs
pub const CLASSIFY_LOAD: &str = r#"Classify each task as:
- Deep Task (high cognitive load, requires uninterrupted attention)
- Micro Task (quick, low cognitive load, 1-5 minutes)
- Other

Output format (one per line):
<task> || <type>

Tasks:
{{task_list}}"#;

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "transcribe" => Some(TRANSCRIBE),
        "extract-tasks" => Some(EXTRACT_TASKS),
        "categorize" => Some(CATEGORIZE),
        "classify-load" => Some(CLASSIFY_LOAD),
        _ => None,
    }
}
