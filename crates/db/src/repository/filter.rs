//! Visible list derivation
//!
//! Turns the stored collection into what the user sees: tombstoned tasks
//! dropped, newest first.

use crate::models::Task;

/// Derive the visible list from a stored collection.
///
/// Drops every task with `deleted = true` and reverses the stored order, so
/// the most recently created task comes first. There is no timestamp; the
/// stored order is the only ordering key. Pure: no I/O.
pub fn derive_visible_list(collection: &[Task]) -> Vec<Task> {
    collection
        .iter()
        .rev()
        .filter(|task| task.is_visible())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_empty_collection() {
        assert!(derive_visible_list(&[]).is_empty());
    }

    #[test]
    fn test_newest_first() {
        let collection = vec![Task::new("1", "A"), Task::new("2", "B"), Task::new("3", "C")];
        assert_eq!(titles(&derive_visible_list(&collection)), ["C", "B", "A"]);
    }

    #[test]
    fn test_deleted_tasks_are_hidden() {
        let mut b = Task::new("2", "B");
        b.delete();
        let collection = vec![Task::new("1", "A"), b, Task::new("3", "C")];
        assert_eq!(titles(&derive_visible_list(&collection)), ["C", "A"]);
    }

    #[test]
    fn test_completed_tasks_stay_visible() {
        let mut a = Task::new("1", "A");
        a.complete();
        let visible = derive_visible_list(&[a]);
        assert_eq!(visible.len(), 1);
        assert!(visible[0].is_completed);
    }

    #[test]
    fn test_all_deleted() {
        let mut a = Task::new("1", "A");
        a.delete();
        assert!(derive_visible_list(&[a]).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let collection = vec![Task::new("1", "A"), Task::new("2", "B")];
        let before = collection.clone();
        let _ = derive_visible_list(&collection);
        assert_eq!(collection, before);
    }

    proptest! {
        #[test]
        fn prop_visible_is_reversed_survivors(flags in prop::collection::vec(any::<(bool, bool)>(), 0..64)) {
            let collection: Vec<Task> = flags
                .iter()
                .enumerate()
                .map(|(i, (completed, deleted))| Task {
                    id: i.to_string(),
                    title: format!("task {}", i),
                    is_completed: *completed,
                    deleted: *deleted,
                })
                .collect();

            let visible = derive_visible_list(&collection);

            let mut expected: Vec<Task> =
                collection.iter().filter(|t| !t.deleted).cloned().collect();
            expected.reverse();
            prop_assert_eq!(visible, expected);
        }
    }
}
