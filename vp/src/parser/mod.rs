//! Line-oriented parsing of model responses
//!
//! The model is prompted for strict formats (one task per line, `||`-delimited
//! triples) but is not trusted to follow them on every line. Malformed lines
//! are recovered silently: dropped here, and for categorization re-appended
//! by [`reconcile_categorized`] with defaults so no task is ever lost between
//! stages.

use std::collections::HashSet;

use crate::domain::{Category, CognitiveLoad, Priority};

/// Delimiter the model is instructed to use between parts of a line
const PART_DELIMITER: &str = "||";

/// Parse an extraction response into ordered task texts
///
/// Splits into lines, trims, drops empties, and strips at most one leading
/// bullet marker (`-` or `•`). A surviving non-empty line becomes one task
/// text. No line limit.
pub fn parse_task_lines(response: &str) -> Vec<String> {
    response
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let line = line
                .strip_prefix('-')
                .or_else(|| line.strip_prefix('•'))
                .unwrap_or(line)
                .trim_start();
            if line.is_empty() { None } else { Some(line.to_string()) }
        })
        .collect()
}

/// One accepted `<task> || <category> || <priority>` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedLine {
    pub text: String,
    pub category: Category,
    pub priority: Priority,
}

/// Parse a categorization response into accepted lines
///
/// A line is accepted only if splitting on `||` yields exactly three parts
/// after trimming and the task text is non-empty. Anything else is silently
/// discarded; unknown category or priority labels fall back to the enum
/// defaults rather than rejecting the line.
pub fn parse_category_lines(response: &str) -> Vec<CategorizedLine> {
    response
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let parts: Vec<&str> = line.split(PART_DELIMITER).map(str::trim).collect();
            if parts.len() != 3 || parts[0].is_empty() {
                return None;
            }
            Some(CategorizedLine {
                text: parts[0].to_string(),
                category: parts[1].parse().unwrap_or_default(),
                priority: parts[2].parse().unwrap_or_default(),
            })
        })
        .collect()
}

/// Parse a cognitive-load response into accepted `(task, load)` pairs
///
/// Same acceptance rule as [`parse_category_lines`], with two parts.
pub fn parse_load_lines(response: &str) -> Vec<(String, CognitiveLoad)> {
    response
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let parts: Vec<&str> = line.split(PART_DELIMITER).map(str::trim).collect();
            if parts.len() != 2 || parts[0].is_empty() {
                return None;
            }
            Some((parts[0].to_string(), parts[1].parse().unwrap_or_default()))
        })
        .collect()
}

/// Re-append every original task the model dropped or mangled
///
/// Any original text with no exact match in the parsed output comes back with
/// default category and priority. The result is never shorter than the input
/// and contains every input text at least once.
pub fn reconcile_categorized(originals: &[String], mut parsed: Vec<CategorizedLine>) -> Vec<CategorizedLine> {
    let seen: HashSet<&str> = parsed.iter().map(|line| line.text.as_str()).collect();
    let missing: Vec<&String> = originals.iter().filter(|text| !seen.contains(text.as_str())).collect();

    for text in missing {
        parsed.push(CategorizedLine {
            text: text.clone(),
            category: Category::default(),
            priority: Priority::default(),
        });
    }
    parsed
}
