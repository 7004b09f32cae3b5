//! Focus-block grouping

use crate::domain::{CognitiveLoad, FocusBlock, Task};

/// How many micro tasks share one batch block
pub const MICRO_BATCH_SIZE: usize = 5;

/// Group tasks into ordered focus blocks
///
/// Every deep task gets its own singleton block, in task order; micro tasks
/// are batched into groups of [`MICRO_BATCH_SIZE`] in task order (the last
/// batch may be partial); unclassified tasks share one trailing block.
/// Deep blocks come first on purpose: the high-focus work leads the session.
pub fn group_into_focus_blocks(tasks: &[Task]) -> Vec<FocusBlock> {
    let mut blocks: Vec<FocusBlock> = tasks
        .iter()
        .filter(|task| task.load == CognitiveLoad::Deep)
        .map(|task| FocusBlock {
            kind: CognitiveLoad::Deep,
            tasks: vec![task.clone()],
        })
        .collect();

    let micro: Vec<Task> = tasks
        .iter()
        .filter(|task| task.load == CognitiveLoad::Micro)
        .cloned()
        .collect();
    for batch in micro.chunks(MICRO_BATCH_SIZE) {
        blocks.push(FocusBlock {
            kind: CognitiveLoad::Micro,
            tasks: batch.to_vec(),
        });
    }

    let other: Vec<Task> = tasks
        .iter()
        .filter(|task| task.load == CognitiveLoad::Other)
        .cloned()
        .collect();
    if !other.is_empty() {
        blocks.push(FocusBlock {
            kind: CognitiveLoad::Other,
            tasks: other,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Priority};

    fn task(text: &str, load: CognitiveLoad) -> Task {
        let mut task = Task::new(text, Category::Other, Priority::default());
        task.load = load;
        task
    }

    #[test]
    fn test_deep_tasks_get_singleton_blocks() {
        let tasks = vec![
            task("Write report", CognitiveLoad::Deep),
            task("Design schema", CognitiveLoad::Deep),
        ];

        let blocks = group_into_focus_blocks(&tasks);
        assert_eq!(blocks.len(), 2);
        for (block, expected) in blocks.iter().zip(["Write report", "Design schema"]) {
            assert_eq!(block.kind, CognitiveLoad::Deep);
            assert_eq!(block.tasks.len(), 1);
            assert_eq!(block.tasks[0].text, expected);
        }
    }

    #[test]
    fn test_seven_micro_tasks_batch_as_five_and_two() {
        let tasks: Vec<Task> = (1..=7).map(|i| task(&format!("micro {}", i), CognitiveLoad::Micro)).collect();

        let blocks = group_into_focus_blocks(&tasks);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].tasks.len(), 5);
        assert_eq!(blocks[1].tasks.len(), 2);
        assert_eq!(blocks[0].tasks[0].text, "micro 1");
        assert_eq!(blocks[1].tasks[1].text, "micro 7");
    }

    #[test]
    fn test_block_order_deep_then_micro_then_other() {
        let tasks = vec![
            task("micro 1", CognitiveLoad::Micro),
            task("unknown", CognitiveLoad::Other),
            task("deep 1", CognitiveLoad::Deep),
            task("micro 2", CognitiveLoad::Micro),
        ];

        let blocks = group_into_focus_blocks(&tasks);
        let kinds: Vec<CognitiveLoad> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![CognitiveLoad::Deep, CognitiveLoad::Micro, CognitiveLoad::Other]);
        assert_eq!(blocks[1].tasks.len(), 2);
        assert_eq!(blocks[2].tasks.len(), 1);
    }

    #[test]
    fn test_no_other_block_without_other_tasks() {
        let tasks = vec![task("deep", CognitiveLoad::Deep), task("micro", CognitiveLoad::Micro)];
        let blocks = group_into_focus_blocks(&tasks);
        assert!(blocks.iter().all(|b| b.kind != CognitiveLoad::Other));
    }

    #[test]
    fn test_empty_task_list_yields_no_blocks() {
        assert!(group_into_focus_blocks(&[]).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_load() -> impl Strategy<Value = CognitiveLoad> {
            prop_oneof![
                Just(CognitiveLoad::Deep),
                Just(CognitiveLoad::Micro),
                Just(CognitiveLoad::Other),
            ]
        }

        proptest! {
            #[test]
            fn every_task_lands_in_exactly_one_block(loads in proptest::collection::vec(arb_load(), 0..25)) {
                let tasks: Vec<Task> = loads
                    .iter()
                    .enumerate()
                    .map(|(i, load)| task(&format!("t{}", i), *load))
                    .collect();

                let blocks = group_into_focus_blocks(&tasks);
                let grouped: usize = blocks.iter().map(|b| b.tasks.len()).sum();
                prop_assert_eq!(grouped, tasks.len());

                for block in &blocks {
                    prop_assert!(!block.tasks.is_empty());
                    prop_assert!(block.tasks.iter().all(|t| t.load == block.kind));
                    if block.kind == CognitiveLoad::Micro {
                        prop_assert!(block.tasks.len() <= MICRO_BATCH_SIZE);
                    }
                }
            }
        }
    }
}
