use log::debug;

use super::{completed_items, pending_items, DateKey, Priority, Store, StoreError, TodoItem};

/// What the user is currently looking at and typing. Owned by the UI, never by the store.
#[derive(Debug, Default)]
pub struct Session {
  active_date: DateKey,
  dialog_open: bool,
  editing: Option<usize>,
  draft_text: String,
  draft_priority: Priority,
}

impl Session {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn select_date(&mut self, date: DateKey) {
    debug!("Selected {date}");
    self.active_date = date;
  }

  #[must_use]
  pub const fn active_date(&self) -> &DateKey {
    &self.active_date
  }

  pub fn open_add_dialog(&mut self) {
    self.editing = None;
    self.dialog_open = true;
  }

  pub fn open_edit_dialog<S: Store>(&mut self, store: &S, index: usize) -> Result<(), StoreError> {
    let todos = store.get_todos(&self.active_date);
    let item = todos.get(index).ok_or_else(|| StoreError::IndexOutOfRange {
      date: self.active_date.clone(),
      index,
      len: todos.len(),
    })?;
    self.draft_text = item.text().into();
    self.draft_priority = item.priority();
    self.editing = Some(index);
    self.dialog_open = true;
    Ok(())
  }

  pub fn set_draft_text(&mut self, text: impl Into<String>) {
    self.draft_text = text.into();
  }

  pub fn set_draft_priority(&mut self, priority: Priority) {
    self.draft_priority = priority;
  }

  /// Returns `false` and leaves the dialog open if there is nothing to save.
  pub fn save<S: Store>(&mut self, store: &mut S) -> Result<bool, StoreError> {
    if self.draft_text.is_empty() || self.active_date.is_unselected() {
      return Ok(false);
    }
    match self.editing {
      Some(index) => store.edit_todo(
        &self.active_date,
        index,
        &self.draft_text,
        self.draft_priority,
      )?,
      None => store.add_todo(&self.active_date, &self.draft_text, self.draft_priority),
    }
    self.draft_text.clear();
    self.editing = None;
    self.dialog_open = false;
    Ok(true)
  }

  pub fn dismiss(&mut self) {
    self.editing = None;
    self.dialog_open = false;
  }

  #[must_use]
  pub const fn save_label(&self) -> &'static str {
    if self.editing.is_some() {
      "Save"
    } else {
      "Add"
    }
  }

  #[must_use]
  pub const fn is_dialog_open(&self) -> bool {
    self.dialog_open
  }

  #[must_use]
  pub const fn editing_index(&self) -> Option<usize> {
    self.editing
  }

  #[must_use]
  pub fn draft_text(&self) -> &str {
    &self.draft_text
  }

  #[must_use]
  pub const fn draft_priority(&self) -> Priority {
    self.draft_priority
  }

  pub fn pending_items<'a, S: Store>(
    &'a self,
    store: &'a S,
  ) -> impl Iterator<Item = (usize, &'a TodoItem)> + 'a {
    pending_items(store, &self.active_date)
  }

  pub fn completed_items<'a, S: Store>(
    &'a self,
    store: &'a S,
  ) -> impl Iterator<Item = (usize, &'a TodoItem)> + 'a {
    completed_items(store, &self.active_date)
  }
}
