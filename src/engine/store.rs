use super::{DateKey, Priority, StoreError, TodoItem};

pub trait Store {
  /// Ignored if `text` is empty or `date` is unselected.
  fn add_todo(&mut self, date: &DateKey, text: &str, priority: Priority);
  /// Ignored if `text` is empty or `date` is unselected. Completion does not carry over.
  fn edit_todo(
    &mut self,
    date: &DateKey,
    index: usize,
    text: &str,
    priority: Priority,
  ) -> Result<(), StoreError>;
  fn delete_todo(&mut self, date: &DateKey, index: usize) -> Result<TodoItem, StoreError>;
  /// Returns whether `item` is completed afterwards.
  fn toggle_complete(
    &mut self,
    date: &DateKey,
    item: &TodoItem,
    index: usize,
  ) -> Result<bool, StoreError>;

  fn get_todos(&self, date: &DateKey) -> &[TodoItem];
  fn is_completed(&self, date: &DateKey, item: &TodoItem) -> bool;
  fn get_dates(&self) -> Vec<&DateKey>;
}
