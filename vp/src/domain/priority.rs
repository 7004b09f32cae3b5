//! Eisenhower priority buckets

use serde::{Deserialize, Serialize};

/// Urgency x importance priority for a task
///
/// Serialized with the exact labels the model is prompted to emit, which are
/// also the labels stored in saved plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    #[serde(rename = "Urgent & Important")]
    UrgentImportant,
    #[serde(rename = "Urgent & Not Important")]
    UrgentNotImportant,
    #[serde(rename = "Important & Not Urgent")]
    ImportantNotUrgent,
    /// Lowest-urgency bucket; the fallback for anything unresolved
    #[default]
    #[serde(rename = "Not Urgent & Not Important")]
    NeitherUrgentNorImportant,
}

impl Priority {
    /// All priorities, in Eisenhower matrix display order
    pub const ALL: [Priority; 4] = [
        Priority::UrgentImportant,
        Priority::UrgentNotImportant,
        Priority::ImportantNotUrgent,
        Priority::NeitherUrgentNorImportant,
    ];
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UrgentImportant => write!(f, "Urgent & Important"),
            Self::UrgentNotImportant => write!(f, "Urgent & Not Important"),
            Self::ImportantNotUrgent => write!(f, "Important & Not Urgent"),
            Self::NeitherUrgentNorImportant => write!(f, "Not Urgent & Not Important"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgent & important" => Ok(Self::UrgentImportant),
            "urgent & not important" => Ok(Self::UrgentNotImportant),
            "important & not urgent" => Ok(Self::ImportantNotUrgent),
            "not urgent & not important" => Ok(Self::NeitherUrgentNorImportant),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::UrgentImportant.to_string(), "Urgent & Important");
        assert_eq!(
            Priority::NeitherUrgentNorImportant.to_string(),
            "Not Urgent & Not Important"
        );
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(
            "Urgent & Important".parse::<Priority>().unwrap(),
            Priority::UrgentImportant
        );
        assert_eq!(
            "important & not urgent".parse::<Priority>().unwrap(),
            Priority::ImportantNotUrgent
        );
        assert!("Somewhat Urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_default_is_lowest_bucket() {
        assert_eq!(Priority::default(), Priority::NeitherUrgentNorImportant);
    }

    #[test]
    fn test_priority_serde_labels() {
        let json = serde_json::to_string(&Priority::UrgentNotImportant).unwrap();
        assert_eq!(json, "\"Urgent & Not Important\"");

        let priority: Priority = serde_json::from_str("\"Not Urgent & Not Important\"").unwrap();
        assert_eq!(priority, Priority::NeitherUrgentNorImportant);
    }
}
