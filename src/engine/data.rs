use serde_derive::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Error as FmtError, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier of a calendar day, as handed out by the calendar widget.
///
/// The empty key is the "no date selected" sentinel.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
  pub fn new(key: impl Into<String>) -> Self {
    Self(key.into())
  }

  #[must_use]
  pub const fn unselected() -> Self {
    Self(String::new())
  }

  #[must_use]
  pub fn is_unselected(&self) -> bool {
    self.0.is_empty()
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for DateKey {
  fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
    self.0.fmt(formatter)
  }
}

impl From<&str> for DateKey {
  fn from(key: &str) -> Self {
    Self::new(key)
  }
}

impl From<String> for DateKey {
  fn from(key: String) -> Self {
    Self(key)
  }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  #[default]
  Low,
  Medium,
  High,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown priority {0:?}, expected low, medium or high")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
  type Err = ParsePriorityError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "low" => Ok(Self::Low),
      "medium" => Ok(Self::Medium),
      "high" => Ok(Self::High),
      _ => Err(ParsePriorityError(s.into())),
    }
  }
}

impl Display for Priority {
  fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
    formatter.write_str(match self {
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
    })
  }
}

/// A single todo. Two items are the same item iff text and priority match.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct TodoItem {
  text: String,
  priority: Priority,
}

impl TodoItem {
  pub fn new(text: impl Into<String>, priority: Priority) -> Self {
    Self {
      text: text.into(),
      priority,
    }
  }

  #[must_use]
  pub fn text(&self) -> &str {
    &self.text
  }

  #[must_use]
  pub const fn priority(&self) -> Priority {
    self.priority
  }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
  Complete,
  Incomplete,
}

/// Calendar annotation for a date, shaped like the widget's `markedDates` entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
  pub marked: bool,
  pub color_class: ColorClass,
}

impl Marker {
  #[must_use]
  pub const fn new(color_class: ColorClass) -> Self {
    Self {
      marked: true,
      color_class,
    }
  }

  #[must_use]
  pub const fn dot_color(&self) -> &'static str {
    match self.color_class {
      ColorClass::Complete => "red",
      ColorClass::Incomplete => "skyblue",
    }
  }
}

pub type Markers = BTreeMap<DateKey, Marker>;
