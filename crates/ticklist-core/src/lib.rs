//! Task-list domain logic for the ticklist widget.
//!
//! Everything here is DOM-free: the browser crate renders a
//! [`session::Session`] and hands it a [`persist::KeyValueStore`]
//! backed by `localStorage`.

pub mod config;
pub mod error;
pub mod page;
pub mod persist;
pub mod session;
pub mod store;
pub mod task;
pub mod view;

pub use config::WidgetConfig;
pub use error::StoreError;
pub use page::Page;
pub use persist::{
  KeyValueStore,
  MemoryStorage,
  StorageKeys
};
pub use session::{
  EditOutcome,
  Lifecycle,
  RowState,
  Session
};
pub use store::TaskStore;
pub use task::Task;
pub use view::ViewFacts;
