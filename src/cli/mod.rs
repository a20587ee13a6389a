mod script;

use clap::Parser;
use log::{info, warn};
use serde_json::to_string as to_json;
use std::error::Error;
use std::fs::File;
use std::io::{stdin, stdout, Read, Write};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::engine::{derive_markers, DateKey, Session, Store, StoreError, TodoItem};

pub use script::{parse_line, Event, ScriptReader};

#[derive(Debug, Parser)]
#[command(name = "datebook", about)]
struct Opts {
  #[arg(long, short, default_value = "-")]
  /// Script of events to play. If missing or -, will read stdin.
  file: String,

  #[arg(long, short)]
  /// Date to select before the first event
  date: Option<String>,

  #[arg(long, conflicts_with = "date")]
  /// Select today's date (UTC) before the first event
  today: bool,
}

pub fn cli<S: Store>(store: S) -> Result<(), Box<dyn Error>> {
  let opts = Opts::parse();
  let mut session = Session::new();
  if let Some(date) = opts.date {
    session.select_date(date.into());
  } else if opts.today {
    session.select_date(today()?);
  }
  match opts.file.as_ref() {
    "-" => run(
      ScriptReader::new(stdin(), atty::is(atty::Stream::Stdin)),
      store,
      session,
      &mut stdout(),
    ),
    file_name => run(
      ScriptReader::new(File::open(file_name)?, false),
      store,
      session,
      &mut stdout(),
    ),
  }
}

pub fn run<S: Store, R: Read, W: Write>(
  script: ScriptReader<R>,
  mut store: S,
  mut session: Session,
  output: &mut W,
) -> Result<(), Box<dyn Error>> {
  for event in script {
    handle_event(&event?, &mut store, &mut session, output)?;
  }
  Ok(())
}

fn today() -> Result<DateKey, Box<dyn Error>> {
  let format = format_description!("[year]-[month]-[day]");
  Ok(OffsetDateTime::now_utc().date().format(format)?.into())
}

fn handle_event<S: Store, W: Write>(
  event: &Event,
  store: &mut S,
  session: &mut Session,
  output: &mut W,
) -> Result<(), Box<dyn Error>> {
  let result = match event {
    Event::Select(date) => {
      session.select_date(date.clone());
      Ok(())
    }
    Event::Today => {
      session.select_date(today()?);
      Ok(())
    }
    Event::OpenAdd => {
      session.open_add_dialog();
      Ok(())
    }
    Event::OpenEdit(index) => session.open_edit_dialog(store, *index),
    Event::Text(text) => {
      session.set_draft_text(text.as_str());
      Ok(())
    }
    Event::Priority(priority) => {
      session.set_draft_priority(*priority);
      Ok(())
    }
    Event::Save => session.save(store).map(|saved| {
      if !saved {
        info!("Nothing to save, dialog stays open");
      }
    }),
    Event::Dismiss => {
      session.dismiss();
      Ok(())
    }
    Event::Add(text, priority) => {
      store.add_todo(session.active_date(), text, *priority);
      Ok(())
    }
    Event::Edit(index, text, priority) => {
      store.edit_todo(session.active_date(), *index, text, *priority)
    }
    Event::Delete(index) => store.delete_todo(session.active_date(), *index).map(drop),
    Event::Toggle(index) => toggle_todo(store, session.active_date(), *index),
    Event::List => return list_todos(store, session, output),
    Event::Markers => return print_markers(store, output),
  };
  if let Err(e) = result {
    warn!("Ignoring {event:?}: {e}");
  }
  Ok(())
}

fn toggle_todo<S: Store>(store: &mut S, date: &DateKey, index: usize) -> Result<(), StoreError> {
  let todos = store.get_todos(date);
  let item = todos
    .get(index)
    .cloned()
    .ok_or_else(|| StoreError::IndexOutOfRange {
      date: date.clone(),
      index,
      len: todos.len(),
    })?;
  store.toggle_complete(date, &item, index).map(drop)
}

fn print_todo<W: Write>(output: &mut W, index: usize, item: &TodoItem) -> Result<(), Box<dyn Error>> {
  writeln!(output, "{} [{}] {}", index, item.priority(), item.text())?;
  Ok(())
}

fn list_todos<S: Store, W: Write>(
  store: &S,
  session: &Session,
  output: &mut W,
) -> Result<(), Box<dyn Error>> {
  let date = session.active_date();
  if date.is_unselected() {
    writeln!(output, "No date selected")?;
    return Ok(());
  }
  writeln!(output, "{date}")?;
  if store.get_todos(date).is_empty() {
    writeln!(output, "No todos for this date")?;
    return Ok(());
  }
  writeln!(output, "Todo:")?;
  for (index, item) in session.pending_items(store) {
    print_todo(output, index, item)?;
  }
  writeln!(output, "Done:")?;
  for (index, item) in session.completed_items(store) {
    print_todo(output, index, item)?;
  }
  Ok(())
}

fn print_markers<S: Store, W: Write>(store: &S, output: &mut W) -> Result<(), Box<dyn Error>> {
  writeln!(output, "{}", to_json(&derive_markers(store))?)?;
  Ok(())
}
