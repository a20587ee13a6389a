use log::{debug, trace};
use std::collections::BTreeMap;

use super::{CompletionTracker, DateKey, Priority, Store, StoreError, TodoItem};

#[derive(Debug, Default)]
pub struct MemStore {
  todos: BTreeMap<DateKey, Vec<TodoItem>>,
  completion: CompletionTracker,
}

impl MemStore {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

fn todos_at<'a>(
  todos: &'a mut BTreeMap<DateKey, Vec<TodoItem>>,
  date: &DateKey,
  index: usize,
) -> Result<&'a mut Vec<TodoItem>, StoreError> {
  let items = todos.get_mut(date);
  let len = items.as_ref().map_or(0, |items| items.len());
  match items {
    Some(items) if index < len => Ok(items),
    _ => Err(StoreError::IndexOutOfRange {
      date: date.clone(),
      index,
      len,
    }),
  }
}

fn ignored(date: &DateKey, text: &str) -> bool {
  if date.is_unselected() || text.is_empty() {
    trace!("Ignoring todo {text:?} for date {date:?}");
    true
  } else {
    false
  }
}

impl Store for MemStore {
  fn add_todo(&mut self, date: &DateKey, text: &str, priority: Priority) {
    if ignored(date, text) {
      return;
    }
    let todos = self.todos.entry(date.clone()).or_default();
    let index = self.completion.pending_end(date, todos);
    todos.insert(index, TodoItem::new(text, priority));
    debug!("Added {text:?} ({priority}) at {date}#{index}");
  }

  fn edit_todo(
    &mut self,
    date: &DateKey,
    index: usize,
    text: &str,
    priority: Priority,
  ) -> Result<(), StoreError> {
    if ignored(date, text) {
      return Ok(());
    }
    let todos = todos_at(&mut self.todos, date, index)?;
    let old = std::mem::replace(&mut todos[index], TodoItem::new(text, priority));
    debug!("Replaced {old:?} with {text:?} ({priority}) at {date}#{index}");
    Ok(())
  }

  fn delete_todo(&mut self, date: &DateKey, index: usize) -> Result<TodoItem, StoreError> {
    let todos = todos_at(&mut self.todos, date, index)?;
    // Completed entries stay; reads only count todos that still exist.
    let item = todos.remove(index);
    if todos.is_empty() {
      self.todos.remove(date);
      debug!("Deleted last todo {item:?} of {date}");
    } else {
      debug!("Deleted {item:?} at {date}#{index}");
    }
    Ok(item)
  }

  fn toggle_complete(
    &mut self,
    date: &DateKey,
    item: &TodoItem,
    index: usize,
  ) -> Result<bool, StoreError> {
    let todos = todos_at(&mut self.todos, date, index)?;
    if todos[index] != *item {
      return Err(StoreError::ItemMismatch {
        date: date.clone(),
        index,
      });
    }
    if self.completion.is_completed(date, item) {
      self.completion.uncomplete(date, item);
      debug!("Reopened {item:?} at {date}#{index}");
      Ok(false)
    } else {
      self.completion.complete(date, todos, item);
      debug!("Completed {item:?} from {date}#{index}");
      Ok(true)
    }
  }

  fn get_todos(&self, date: &DateKey) -> &[TodoItem] {
    self.todos.get(date).map(Vec::as_slice).unwrap_or_default()
  }

  fn is_completed(&self, date: &DateKey, item: &TodoItem) -> bool {
    self.completion.is_completed(date, item)
  }

  fn get_dates(&self) -> Vec<&DateKey> {
    self.todos.keys().collect()
  }
}
