//! Day-bucketed schedule and focus-block groupings

use serde::{Deserialize, Serialize};

use super::task::{CognitiveLoad, ScheduleBucket, Task};

/// Tasks partitioned into the three day buckets
///
/// Serializes as the `{"Today": [...], "Tomorrow": [...], "Later": [...]}`
/// mapping stored in saved plans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "Today", default)]
    pub today: Vec<Task>,

    #[serde(rename = "Tomorrow", default)]
    pub tomorrow: Vec<Task>,

    #[serde(rename = "Later", default)]
    pub later: Vec<Task>,
}

impl Schedule {
    /// Tasks in one bucket
    pub fn bucket(&self, bucket: ScheduleBucket) -> &[Task] {
        match bucket {
            ScheduleBucket::Today => &self.today,
            ScheduleBucket::Tomorrow => &self.tomorrow,
            ScheduleBucket::Later => &self.later,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.tomorrow.is_empty() && self.later.is_empty()
    }

    pub fn len(&self) -> usize {
        self.today.len() + self.tomorrow.len() + self.later.len()
    }
}

/// A display grouping of tasks sharing a cognitive-load tier
///
/// Ephemeral: recomputed from the current task list on demand, persisted only
/// as part of a saved plan snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusBlock {
    #[serde(rename = "type")]
    pub kind: CognitiveLoad,

    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Priority};

    #[test]
    fn test_schedule_serde_mapping_labels() {
        let schedule = Schedule {
            today: vec![Task::new("Email client", Category::Work, Priority::UrgentImportant)],
            tomorrow: vec![],
            later: vec![],
        };

        let json = serde_json::to_value(&schedule).unwrap();
        assert!(json.is_object());
        assert_eq!(json["Today"][0]["task"], "Email client");
        assert_eq!(json["Tomorrow"], serde_json::json!([]));
        assert_eq!(json["Later"], serde_json::json!([]));
    }

    #[test]
    fn test_focus_block_serde_kind_label() {
        let block = FocusBlock {
            kind: CognitiveLoad::Deep,
            tasks: vec![Task::new("Write report", Category::Work, Priority::UrgentImportant)],
        };

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "Deep Task");
        assert_eq!(json["tasks"][0]["task"], "Write report");
    }

    #[test]
    fn test_schedule_len_and_empty() {
        let mut schedule = Schedule::default();
        assert!(schedule.is_empty());

        schedule.later.push(Task::new("Sort photos", Category::Personal, Priority::default()));
        assert!(!schedule.is_empty());
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.bucket(ScheduleBucket::Later).len(), 1);
    }
}
