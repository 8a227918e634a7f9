use crate::model::segment::SegmentRow;

/// Ordered list of task names.
///
/// The name doubles as the task's identity: it is the join key between the
/// list and the segment rows, so generated names are kept unique. Renaming is
/// allowed to collide (the user may genuinely want two tasks to share a
/// chart lane).
#[derive(Debug, Clone, PartialEq)]
pub struct TaskList {
    names: Vec<String>,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            names: vec!["Task 1".to_string()],
        }
    }
}

impl TaskList {
    /// Build the list from imported rows: distinct task names in
    /// first-appearance order. Empty input falls back to the default list.
    pub fn from_rows(rows: &[SegmentRow]) -> Self {
        let mut names: Vec<String> = Vec::new();
        for row in rows {
            if !names.contains(&row.task) {
                names.push(row.task.clone());
            }
        }
        if names.is_empty() {
            Self::default()
        } else {
            Self { names }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    /// Swap with the task above; no-op at the top.
    pub fn move_up(&mut self, i: usize) {
        if i > 0 && i < self.names.len() {
            self.names.swap(i - 1, i);
        }
    }

    /// Swap with the task below; no-op at the bottom.
    pub fn move_down(&mut self, i: usize) {
        if i + 1 < self.names.len() {
            self.names.swap(i, i + 1);
        }
    }

    /// Insert a freshly named task at position `i`.
    pub fn insert_above(&mut self, i: usize) {
        let name = self.fresh_name();
        self.names.insert(i.min(self.names.len()), name);
    }

    /// Insert a freshly named task just below position `i`.
    pub fn insert_below(&mut self, i: usize) {
        let name = self.fresh_name();
        self.names.insert((i + 1).min(self.names.len()), name);
    }

    /// Grow with fresh default names or truncate to the first `n` entries.
    pub fn set_count(&mut self, n: usize) {
        if n > self.names.len() {
            while self.names.len() < n {
                let name = self.fresh_name();
                self.names.push(name);
            }
        } else {
            self.names.truncate(n);
        }
    }

    pub fn rename(&mut self, i: usize, new_name: impl Into<String>) {
        if let Some(slot) = self.names.get_mut(i) {
            *slot = new_name.into();
        }
    }

    /// Next generated name: "Task {count+1}", bumped until unused so a
    /// reordered or renamed list never hands out a duplicate join key.
    fn fresh_name(&self) -> String {
        let mut n = self.names.len() + 1;
        loop {
            let candidate = format!("Task {}", n);
            if !self.names.iter().any(|existing| existing == &candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> TaskList {
        let mut list = TaskList::default();
        list.names = names.iter().map(|s| s.to_string()).collect();
        list
    }

    #[test]
    fn starts_with_single_default_task() {
        let list = TaskList::default();
        assert_eq!(list.names(), &["Task 1".to_string()]);
    }

    #[test]
    fn move_up_then_move_down_restores_order() {
        let original = list_of(&["Alpha", "Beta", "Gamma", "Delta"]);
        for i in 1..original.len() {
            let mut list = original.clone();
            list.move_up(i);
            list.move_down(i - 1);
            assert_eq!(list, original, "round trip at index {}", i);
        }
    }

    #[test]
    fn move_up_at_top_and_move_down_at_bottom_are_noops() {
        let original = list_of(&["Alpha", "Beta"]);
        let mut list = original.clone();
        list.move_up(0);
        assert_eq!(list, original);
        list.move_down(1);
        assert_eq!(list, original);
    }

    #[test]
    fn insert_above_then_remove_restores_list() {
        let original = list_of(&["Alpha", "Beta", "Gamma"]);
        let mut list = original.clone();
        list.insert_above(1);
        assert_eq!(list.len(), 4);
        list.names.remove(1);
        assert_eq!(list, original);
    }

    #[test]
    fn insert_below_places_after_index() {
        let mut list = list_of(&["Alpha", "Beta"]);
        list.insert_below(0);
        assert_eq!(list.names(), &["Alpha", "Task 3", "Beta"]);
    }

    #[test]
    fn generated_names_skip_existing_ones() {
        // "Task 3" is taken, so the next generated name bumps past it.
        let mut list = list_of(&["Task 3", "Alpha"]);
        list.insert_below(1);
        assert_eq!(list.names(), &["Task 3", "Alpha", "Task 4"]);
    }

    #[test]
    fn set_count_grows_with_defaults_and_truncates() {
        let mut list = TaskList::default();
        list.set_count(3);
        assert_eq!(list.names(), &["Task 1", "Task 2", "Task 3"]);
        list.set_count(2);
        assert_eq!(list.names(), &["Task 1", "Task 2"]);
    }

    #[test]
    fn from_rows_keeps_first_appearance_order() {
        use crate::model::segment::{segment_end, SegmentRow};
        let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_time(chrono::NaiveTime::MIN);
        let row = |task: &str, segment: u32| SegmentRow {
            task: task.to_string(),
            segment,
            start,
            end: segment_end(start, 1.0),
            duration_months: 1.0,
        };
        let rows = vec![row("Build", 1), row("Design", 1), row("Build", 2)];
        let list = TaskList::from_rows(&rows);
        assert_eq!(list.names(), &["Build", "Design"]);
        assert_eq!(TaskList::from_rows(&[]), TaskList::default());
    }
}
