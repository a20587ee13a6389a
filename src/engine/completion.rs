use std::collections::{HashMap, HashSet};

use super::{DateKey, TodoItem};

/// Completed todos per date, matched by value.
#[derive(Debug, Default)]
pub struct CompletionTracker {
  completed: HashMap<DateKey, HashSet<TodoItem>>,
}

impl CompletionTracker {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn is_completed(&self, date: &DateKey, item: &TodoItem) -> bool {
    self
      .completed
      .get(date)
      .map_or(false, |items| items.contains(item))
  }

  /// Marks `item` as completed and moves it behind everything else.
  /// Equal todos are indistinguishable, so they move along with it.
  /// Does nothing if `item` is not one of `todos`.
  pub(super) fn complete(&mut self, date: &DateKey, todos: &mut Vec<TodoItem>, item: &TodoItem) {
    if !todos.contains(item) {
      return;
    }
    let (same, mut others): (Vec<_>, Vec<_>) = todos.drain(..).partition(|todo| todo == item);
    others.extend(same);
    *todos = others;
    self
      .completed
      .entry(date.clone())
      .or_default()
      .insert(item.clone());
  }

  /// Un-marks `item`. Its position is left alone.
  pub fn uncomplete(&mut self, date: &DateKey, item: &TodoItem) {
    if let Some(items) = self.completed.get_mut(date) {
      items.remove(item);
      if items.is_empty() {
        self.completed.remove(date);
      }
    }
  }

  /// Where a new pending todo goes: right before the trailing run of completed todos.
  #[must_use]
  pub fn pending_end(&self, date: &DateKey, todos: &[TodoItem]) -> usize {
    todos.len()
      - todos
        .iter()
        .rev()
        .take_while(|item| self.is_completed(date, item))
        .count()
  }

  #[must_use]
  pub fn completed_count(&self, date: &DateKey, todos: &[TodoItem]) -> usize {
    todos
      .iter()
      .filter(|item| self.is_completed(date, item))
      .count()
  }
}
