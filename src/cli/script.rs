use serde_json::from_str as from_json;
use std::error::Error;
use std::io::{stderr, BufRead, BufReader, Lines, Read, Stderr, Write};

use crate::engine::{DateKey, Priority};

/// One UI event of a script line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
  Select(DateKey),
  Today,
  OpenAdd,
  OpenEdit(usize),
  Text(String),
  Priority(Priority),
  Save,
  Dismiss,
  Add(String, Priority),
  Edit(usize, String, Priority),
  Delete(usize),
  Toggle(usize),
  List,
  Markers,
}

/// Reads `name: [json, ...]` lines. Blank lines and `#` comments are skipped.
#[derive(Debug)]
pub struct ScriptReader<R: Read, P: Write = Stderr> {
  source: Lines<BufReader<R>>,
  line: usize,
  prompt: Option<P>,
}

impl<R: Read> ScriptReader<R> {
  /// With `prompt`, a `> ` goes to stderr before each line is read.
  pub fn new(source: R, prompt: bool) -> Self {
    Self {
      source: BufReader::new(source).lines(),
      line: 0,
      prompt: prompt.then(stderr),
    }
  }
}

impl<R: Read, P: Write> ScriptReader<R, P> {
  pub fn with_prompt(source: R, prompt: P) -> Self {
    Self {
      source: BufReader::new(source).lines(),
      line: 0,
      prompt: Some(prompt),
    }
  }
}

impl<R: Read, P: Write> Iterator for ScriptReader<R, P> {
  type Item = Result<Event, Box<dyn Error>>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(prompt) = &mut self.prompt {
        if let Err(e) = write!(prompt, "> ").and_then(|()| prompt.flush()) {
          return Some(Err(e.into()));
        }
      }
      let line = match self.source.next()? {
        Ok(line) => line,
        Err(e) => return Some(Err(e.into())),
      };
      self.line += 1;
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      return Some(
        parse_line(line).map_err(|e| format!("Line {}: {} ({})", self.line, e, line).into()),
      );
    }
  }
}

fn no_args(args: &str) -> Result<(), Box<dyn Error>> {
  let []: [String; 0] = from_json(args)?;
  Ok(())
}

pub fn parse_line(line: &str) -> Result<Event, Box<dyn Error>> {
  let (name, args) = line.split_at(line.find(':').ok_or("Invalid line")? + 1);
  Ok(match name {
    "select:" => {
      let [date]: [String; 1] = from_json(args)?;
      Event::Select(date.into())
    }
    "today:" => no_args(args).map(|()| Event::Today)?,
    "open_add:" => no_args(args).map(|()| Event::OpenAdd)?,
    "open_edit:" => {
      let [index]: [usize; 1] = from_json(args)?;
      Event::OpenEdit(index)
    }
    "text:" => {
      let [text]: [String; 1] = from_json(args)?;
      Event::Text(text)
    }
    "priority:" => {
      let [priority]: [String; 1] = from_json(args)?;
      Event::Priority(priority.parse()?)
    }
    "save:" => no_args(args).map(|()| Event::Save)?,
    "dismiss:" => no_args(args).map(|()| Event::Dismiss)?,
    "add:" => {
      let (text, priority): (String, String) = from_json(args)?;
      Event::Add(text, priority.parse()?)
    }
    "edit:" => {
      let (index, text, priority): (usize, String, String) = from_json(args)?;
      Event::Edit(index, text, priority.parse()?)
    }
    "delete:" => {
      let [index]: [usize; 1] = from_json(args)?;
      Event::Delete(index)
    }
    "toggle:" => {
      let [index]: [usize; 1] = from_json(args)?;
      Event::Toggle(index)
    }
    "list:" => no_args(args).map(|()| Event::List)?,
    "markers:" => no_args(args).map(|()| Event::Markers)?,
    _ => return Err(format!("Unexpected event {name}").into()),
  })
}
