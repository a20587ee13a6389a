use super::{ColorClass, Marker, Markers, Store};

/// Marks every date that has todos; complete only if all of them are done.
pub fn derive_markers<S: Store>(store: &S) -> Markers {
  store
    .get_dates()
    .into_iter()
    .map(|date| {
      let todos = store.get_todos(date);
      let done = todos
        .iter()
        .filter(|item| store.is_completed(date, item))
        .count();
      let color_class = if !todos.is_empty() && done == todos.len() {
        ColorClass::Complete
      } else {
        ColorClass::Incomplete
      };
      (date.clone(), Marker::new(color_class))
    })
    .collect()
}
