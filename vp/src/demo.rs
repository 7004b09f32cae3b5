//! Built-in demo plan
//!
//! A canned plan for trying the rendering and save flow without a credential
//! or a gateway call. The tasks go through the real scheduler and grouping.

use crate::domain::{Category, CognitiveLoad, Priority, Task, TaskPlan};
use crate::scheduler;

const DEMO_TRANSCRIPT: &str = "Quick recap: finalize the proposal deck for the client review tomorrow, \
     send them a timeline update, study data structures for the interview prep, \
     pick up prescriptions and groceries on the way home, book a dentist \
     appointment for next month, and prep a 20-minute cardio session tonight.";

/// Build the demo plan
pub fn demo_plan() -> TaskPlan {
    let seed: [(&str, Category, Priority, CognitiveLoad); 6] = [
        (
            "Finalize proposal deck for client review",
            Category::Work,
            Priority::UrgentImportant,
            CognitiveLoad::Deep,
        ),
        (
            "Email client with updated project timeline",
            Category::Work,
            Priority::UrgentNotImportant,
            CognitiveLoad::Micro,
        ),
        (
            "Study data structures for interview prep",
            Category::Study,
            Priority::ImportantNotUrgent,
            CognitiveLoad::Deep,
        ),
        (
            "Pick up prescriptions and groceries",
            Category::Errand,
            Priority::UrgentNotImportant,
            CognitiveLoad::Micro,
        ),
        (
            "Book dentist appointment for next month",
            Category::Health,
            Priority::ImportantNotUrgent,
            CognitiveLoad::Micro,
        ),
        (
            "Plan meals for the week and grocery list",
            Category::Personal,
            Priority::NeitherUrgentNorImportant,
            CognitiveLoad::Other,
        ),
    ];

    let tasks: Vec<Task> = seed
        .into_iter()
        .map(|(text, category, priority, load)| {
            let mut task = Task::new(text, category, priority);
            task.load = load;
            task.bucket = scheduler::bucket_for(priority);
            task
        })
        .collect();

    let schedule = scheduler::build_schedule(&tasks);
    let blocks = scheduler::group_into_focus_blocks(&tasks);

    TaskPlan {
        transcript: DEMO_TRANSCRIPT.to_string(),
        tasks,
        schedule,
        blocks,
    }
}
