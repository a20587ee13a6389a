use super::{DateKey, Store, TodoItem};

/// Pending todos of `date` with their index in the full list.
pub fn pending_items<'a, S: Store>(
  store: &'a S,
  date: &'a DateKey,
) -> impl Iterator<Item = (usize, &'a TodoItem)> + 'a {
  filtered(store, date, false)
}

/// Completed todos of `date` with their index in the full list.
pub fn completed_items<'a, S: Store>(
  store: &'a S,
  date: &'a DateKey,
) -> impl Iterator<Item = (usize, &'a TodoItem)> + 'a {
  filtered(store, date, true)
}

fn filtered<'a, S: Store>(
  store: &'a S,
  date: &'a DateKey,
  completed: bool,
) -> impl Iterator<Item = (usize, &'a TodoItem)> + 'a {
  store
    .get_todos(date)
    .iter()
    .enumerate()
    .filter(move |(_, item)| store.is_completed(date, item) == completed)
}

#[cfg(test)]
mod tests {
  use super::{completed_items, pending_items};
  use crate::engine::{DateKey, MemStore, Priority, Store, TodoItem};

  #[test]
  fn indexes_refer_to_the_full_list() {
    let mut store = MemStore::new();
    let date = DateKey::from("2024-06-01");
    for text in ["a", "b", "c"] {
      store.add_todo(&date, text, Priority::Low);
    }
    store
      .toggle_complete(&date, &TodoItem::new("a", Priority::Low), 0)
      .unwrap();
    store
      .toggle_complete(&date, &TodoItem::new("b", Priority::Low), 0)
      .unwrap();
    store
      .toggle_complete(&date, &TodoItem::new("a", Priority::Low), 1)
      .unwrap();

    let pending: Vec<_> = pending_items(&store, &date)
      .map(|(index, item)| (index, item.text()))
      .collect();
    assert_eq!(pending, [(0, "c"), (1, "a")]);
    let completed: Vec<_> = completed_items(&store, &date)
      .map(|(index, item)| (index, item.text()))
      .collect();
    assert_eq!(completed, [(2, "b")]);
  }

  #[test]
  fn unknown_date_is_empty() {
    let store = MemStore::new();
    let date = DateKey::from("1999-12-31");
    assert_eq!(pending_items(&store, &date).count(), 0);
    assert_eq!(completed_items(&store, &date).count(), 0);
  }
}
