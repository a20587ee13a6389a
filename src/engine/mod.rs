mod annotator;
mod completion;
mod data;
mod error;
mod mem_store;
mod session;
mod store;
mod view;

pub use annotator::derive_markers;
pub use completion::CompletionTracker;
pub use data::{ColorClass, DateKey, Marker, Markers, ParsePriorityError, Priority, TodoItem};
pub use error::StoreError;
pub use mem_store::MemStore;
pub use session::Session;
pub use store::Store;
pub use view::{completed_items, pending_items};
