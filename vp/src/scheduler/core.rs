//! Priority-to-day-bucket assignment

use crate::domain::{Priority, Schedule, ScheduleBucket, Task};

/// Day bucket for a priority
///
/// Total and deterministic over the closed priority set: urgent work lands
/// today, important-but-not-urgent work tomorrow, everything else later.
pub fn bucket_for(priority: Priority) -> ScheduleBucket {
    match priority {
        Priority::UrgentImportant | Priority::UrgentNotImportant => ScheduleBucket::Today,
        Priority::ImportantNotUrgent => ScheduleBucket::Tomorrow,
        Priority::NeitherUrgentNorImportant => ScheduleBucket::Later,
    }
}

/// Partition tasks into the three day buckets, preserving order
pub fn build_schedule(tasks: &[Task]) -> Schedule {
    let mut schedule = Schedule::default();
    for task in tasks {
        match task.bucket {
            ScheduleBucket::Today => schedule.today.push(task.clone()),
            ScheduleBucket::Tomorrow => schedule.tomorrow.push(task.clone()),
            ScheduleBucket::Later => schedule.later.push(task.clone()),
        }
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_bucket_for_mapping() {
        assert_eq!(bucket_for(Priority::UrgentImportant), ScheduleBucket::Today);
        assert_eq!(bucket_for(Priority::UrgentNotImportant), ScheduleBucket::Today);
        assert_eq!(bucket_for(Priority::ImportantNotUrgent), ScheduleBucket::Tomorrow);
        assert_eq!(bucket_for(Priority::NeitherUrgentNorImportant), ScheduleBucket::Later);
    }

    #[test]
    fn test_bucket_for_is_deterministic() {
        for priority in Priority::ALL {
            assert_eq!(bucket_for(priority), bucket_for(priority));
        }
    }

    #[test]
    fn test_build_schedule_partitions_in_order() {
        let mut tasks = vec![
            Task::new("Email client", Category::Work, Priority::UrgentImportant),
            Task::new("Study algorithms", Category::Study, Priority::ImportantNotUrgent),
            Task::new("Buy milk", Category::Errand, Priority::UrgentNotImportant),
            Task::new("Sort photos", Category::Personal, Priority::NeitherUrgentNorImportant),
        ];
        for task in &mut tasks {
            task.bucket = bucket_for(task.priority);
        }

        let schedule = build_schedule(&tasks);
        assert_eq!(schedule.today.len(), 2);
        assert_eq!(schedule.today[0].text, "Email client");
        assert_eq!(schedule.today[1].text, "Buy milk");
        assert_eq!(schedule.tomorrow.len(), 1);
        assert_eq!(schedule.later.len(), 1);
        assert_eq!(schedule.len(), tasks.len());
    }
}
