#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]

use std::error::Error;

use datebook::cli::cli;
use datebook::engine::MemStore;

fn main() -> Result<(), Box<dyn Error>> {
  env_logger::init();
  cli(MemStore::new())
}
