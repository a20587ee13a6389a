//! The add / complete / delete walkthrough on a single day, step by step

use datebook::engine::{
  completed_items, derive_markers, pending_items, ColorClass, DateKey, MemStore, Priority, Store,
  StoreError, TodoItem,
};

fn day() -> DateKey {
  DateKey::from("2024-06-01")
}

fn pending<'a>(store: &'a MemStore, date: &'a DateKey) -> Vec<(&'a str, Priority, usize)> {
  pending_items(store, date)
    .map(|(index, item)| (item.text(), item.priority(), index))
    .collect()
}

fn completed<'a>(store: &'a MemStore, date: &'a DateKey) -> Vec<(&'a str, Priority, usize)> {
  completed_items(store, date)
    .map(|(index, item)| (item.text(), item.priority(), index))
    .collect()
}

fn marker(store: &MemStore) -> Option<ColorClass> {
  derive_markers(store)
    .get(&day())
    .map(|marker| marker.color_class)
}

/// Two todos on one day
fn scenario_a() -> MemStore {
  let mut store = MemStore::new();
  store.add_todo(&day(), "Buy milk", Priority::Low);
  store.add_todo(&day(), "Call Bob", Priority::High);
  store
}

/// ... the first one completed
fn scenario_b() -> MemStore {
  let mut store = scenario_a();
  store
    .toggle_complete(&day(), &TodoItem::new("Buy milk", Priority::Low), 0)
    .unwrap();
  store
}

/// ... and then the second one
fn scenario_c() -> MemStore {
  let mut store = scenario_b();
  store
    .toggle_complete(&day(), &TodoItem::new("Call Bob", Priority::High), 0)
    .unwrap();
  store
}

#[test]
fn adding_two_todos() {
  let day = day();
  let store = scenario_a();
  assert_eq!(
    pending(&store, &day),
    [("Buy milk", Priority::Low, 0), ("Call Bob", Priority::High, 1)]
  );
  assert!(completed(&store, &day).is_empty());
  let markers = derive_markers(&store);
  assert_eq!(markers.len(), 1);
  assert_eq!(marker(&store), Some(ColorClass::Incomplete));
}

#[test]
fn completing_one_of_two() {
  let day = day();
  let store = scenario_b();
  assert_eq!(pending(&store, &day), [("Call Bob", Priority::High, 0)]);
  assert_eq!(completed(&store, &day), [("Buy milk", Priority::Low, 1)]);
  assert_eq!(marker(&store), Some(ColorClass::Incomplete));
}

#[test]
fn completing_both() {
  let day = day();
  let store = scenario_c();
  assert!(pending(&store, &day).is_empty());
  assert_eq!(completed(&store, &day).len(), 2);
  assert_eq!(marker(&store), Some(ColorClass::Complete));
}

#[test]
fn deleting_everything() {
  let mut store = scenario_c();
  store.delete_todo(&day(), 0).unwrap();
  assert_eq!(marker(&store), Some(ColorClass::Complete));
  store.delete_todo(&day(), 0).unwrap();
  assert!(store.get_dates().is_empty());
  assert!(store.get_todos(&day()).is_empty());
  assert_eq!(marker(&store), None);
}

#[test]
fn editing_a_todo_that_was_never_added() {
  let day = day();
  let mut store = scenario_a();
  let other_day = DateKey::from("2024-06-02");
  assert_eq!(
    store.edit_todo(&other_day, 0, "Walk the dog", Priority::Medium),
    Err(StoreError::IndexOutOfRange {
      date: other_day.clone(),
      index: 0,
      len: 0
    })
  );
  assert_eq!(
    store.edit_todo(&day, 2, "Walk the dog", Priority::Medium),
    Err(StoreError::IndexOutOfRange {
      date: day.clone(),
      index: 2,
      len: 2
    })
  );
  assert_eq!(store.get_dates(), [&day]);
  assert_eq!(
    pending(&store, &day),
    [("Buy milk", Priority::Low, 0), ("Call Bob", Priority::High, 1)]
  );
}

#[test]
fn partially_completed_days_stay_incomplete() {
  let mut store = MemStore::new();
  let texts = ["a", "b", "c", "d"];
  for text in texts {
    store.add_todo(&day(), text, Priority::Medium);
  }
  for (count, text) in texts.iter().enumerate() {
    assert_eq!(marker(&store), Some(ColorClass::Incomplete), "{count} done");
    let index = store
      .get_todos(&day())
      .iter()
      .position(|item| item.text() == *text)
      .unwrap();
    store
      .toggle_complete(&day(), &TodoItem::new(*text, Priority::Medium), index)
      .unwrap();
  }
  assert_eq!(marker(&store), Some(ColorClass::Complete));
}
