use super::types::{TaskKind, TaskRecord};
use std::collections::VecDeque;

/// Session-lifetime list of completed tasks, newest first.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: VecDeque<TaskRecord>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Prepend a record
    pub fn add_task(&mut self, record: TaskRecord) {
        self.tasks.push_front(record);
    }

    /// Owned snapshot, newest first
    pub fn get_all(&self) -> Vec<TaskRecord> {
        self.tasks.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskRecord> {
        self.tasks.iter()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn total_duration_seconds(&self) -> u64 {
        self.tasks
            .iter()
            .map(|t| u64::from(t.duration_seconds()))
            .sum()
    }

    pub fn count_by_kind(&self, kind: TaskKind) -> usize {
        self.tasks.iter().filter(|t| t.kind() == kind).count()
    }

    /// JSON array of all records, newest first
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: TaskKind, duration: u32) -> TaskRecord {
        TaskRecord::new(kind, None, duration)
    }

    #[test]
    fn test_empty_store() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.total_count(), 0);
        assert_eq!(store.total_duration_seconds(), 0);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_reverse_insertion_order() {
        let mut store = TaskStore::new();
        let inserted: Vec<TaskRecord> = (10..=20).map(|d| record(TaskKind::Text, d)).collect();
        for r in &inserted {
            store.add_task(r.clone());
        }

        let all = store.get_all();
        let expected: Vec<TaskRecord> = inserted.into_iter().rev().collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_totals_match_snapshot() {
        let mut store = TaskStore::new();
        store.add_task(record(TaskKind::Text, 12));
        store.add_task(record(TaskKind::Image, 11));
        store.add_task(record(TaskKind::Photo, 15));

        let sum: u64 = store
            .get_all()
            .iter()
            .map(|t| u64::from(t.duration_seconds()))
            .sum();
        assert_eq!(store.total_duration_seconds(), sum);
        assert_eq!(store.total_duration_seconds(), 38);
        assert_eq!(store.total_count(), 3);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut store = TaskStore::new();
        store.add_task(record(TaskKind::Text, 12));

        let snapshot = store.get_all();
        store.add_task(record(TaskKind::Photo, 15));

        // earlier snapshot still shows one task
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].kind(), TaskKind::Text);
        assert_eq!(store.get_all().len(), 2);
    }

    #[test]
    fn test_json_dump_is_newest_first() {
        let mut store = TaskStore::new();
        store.add_task(record(TaskKind::Text, 12));
        store.add_task(record(TaskKind::Image, 11));

        let value: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["kind"], "image");
        assert_eq!(items[0]["duration_seconds"], 11);
        assert!(items[0]["text"].is_null());
        assert_eq!(items[1]["kind"], "text");
    }

    #[test]
    fn test_count_by_kind() {
        let mut store = TaskStore::new();
        store.add_task(record(TaskKind::Text, 12));
        store.add_task(record(TaskKind::Text, 13));
        store.add_task(record(TaskKind::Photo, 15));

        assert_eq!(store.count_by_kind(TaskKind::Text), 2);
        assert_eq!(store.count_by_kind(TaskKind::Image), 0);
        assert_eq!(store.count_by_kind(TaskKind::Photo), 1);
    }
}
