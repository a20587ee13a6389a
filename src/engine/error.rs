use thiserror::Error;

use super::DateKey;

/// Contract violations by the caller. The store is left untouched when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
  #[error("Index {index} out of range for {date} ({len} todos)")]
  IndexOutOfRange {
    date: DateKey,
    index: usize,
    len: usize,
  },

  #[error("Todo at index {index} for {date} is not the one to toggle")]
  ItemMismatch { date: DateKey, index: usize },
}
