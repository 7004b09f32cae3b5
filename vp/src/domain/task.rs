//! Task record and its classification enums
//!
//! Field names and labels in the serialized form match the saved-plan storage
//! format (`task`, `type`, `schedule`).

use serde::{Deserialize, Serialize};

use super::priority::Priority;

/// Life-area category for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Work,
    Study,
    Errand,
    Personal,
    Health,
    Finance,
    /// Fallback for anything unresolved
    #[default]
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Work => "Work",
            Self::Study => "Study",
            Self::Errand => "Errand",
            Self::Personal => "Personal",
            Self::Health => "Health",
            Self::Finance => "Finance",
            Self::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "study" => Ok(Self::Study),
            "errand" => Ok(Self::Errand),
            "personal" => Ok(Self::Personal),
            "health" => Ok(Self::Health),
            "finance" => Ok(Self::Finance),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Cognitive effort tier of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CognitiveLoad {
    /// Sustained, uninterrupted attention
    #[serde(rename = "Deep Task")]
    Deep,
    /// Quick, low-focus, minutes-scale
    #[serde(rename = "Micro Task")]
    Micro,
    #[default]
    Other,
}

impl std::fmt::Display for CognitiveLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deep => write!(f, "Deep Task"),
            Self::Micro => write!(f, "Micro Task"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for CognitiveLoad {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deep task" => Ok(Self::Deep),
            "micro task" => Ok(Self::Micro),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown cognitive load: {}", s)),
        }
    }
}

/// Day bucket a task is scheduled into
///
/// Always derived from priority by the scheduler, never set by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScheduleBucket {
    Today,
    Tomorrow,
    /// Least-disruptive default
    #[default]
    Later,
}

impl ScheduleBucket {
    /// All buckets, in display order
    pub const ALL: [ScheduleBucket; 3] = [ScheduleBucket::Today, ScheduleBucket::Tomorrow, ScheduleBucket::Later];
}

impl std::fmt::Display for ScheduleBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => write!(f, "Today"),
            Self::Tomorrow => write!(f, "Tomorrow"),
            Self::Later => write!(f, "Later"),
        }
    }
}

/// The unit flowing through the pipeline
///
/// Every classification field is a non-optional enum with an explicit
/// default, so a task leaving the pipeline is always fully populated even
/// when the model response for it was missing or malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Imperative description, non-empty
    #[serde(rename = "task")]
    pub text: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub priority: Priority,

    #[serde(rename = "type", default)]
    pub load: CognitiveLoad,

    #[serde(rename = "schedule", default)]
    pub bucket: ScheduleBucket,

    /// User-toggled completion flag; the pipeline never touches it
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a task with defaulted load, bucket, and done flag
    pub fn new(text: impl Into<String>, category: Category, priority: Priority) -> Self {
        Self {
            text: text.into(),
            category,
            priority,
            load: CognitiveLoad::default(),
            bucket: ScheduleBucket::default(),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_and_default() {
        assert_eq!("Errand".parse::<Category>().unwrap(), Category::Errand);
        assert_eq!("finance".parse::<Category>().unwrap(), Category::Finance);
        assert!("Chores".parse::<Category>().is_err());
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_cognitive_load_parse() {
        assert_eq!("Deep Task".parse::<CognitiveLoad>().unwrap(), CognitiveLoad::Deep);
        assert_eq!("micro task".parse::<CognitiveLoad>().unwrap(), CognitiveLoad::Micro);
        assert!("Shallow Task".parse::<CognitiveLoad>().is_err());
    }

    #[test]
    fn test_task_serde_field_names() {
        let task = Task {
            text: "Buy milk".to_string(),
            category: Category::Errand,
            priority: Priority::UrgentNotImportant,
            load: CognitiveLoad::Micro,
            bucket: ScheduleBucket::Today,
            done: false,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["task"], "Buy milk");
        assert_eq!(json["category"], "Errand");
        assert_eq!(json["priority"], "Urgent & Not Important");
        assert_eq!(json["type"], "Micro Task");
        assert_eq!(json["schedule"], "Today");
        assert_eq!(json["done"], false);
    }

    #[test]
    fn test_task_deserialize_fills_missing_fields() {
        // A bare record gets every classification defaulted, never a null.
        let task: Task = serde_json::from_str(r#"{"task": "Buy milk"}"#).unwrap();
        assert_eq!(task.category, Category::Other);
        assert_eq!(task.priority, Priority::NeitherUrgentNorImportant);
        assert_eq!(task.load, CognitiveLoad::Other);
        assert_eq!(task.bucket, ScheduleBucket::Later);
        assert!(!task.done);
    }

    #[test]
    fn test_task_round_trip() {
        let task = Task::new("Email client", Category::Work, Priority::UrgentImportant);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
