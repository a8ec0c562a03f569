use std::collections::BTreeMap;

use anyhow::{Context, anyhow};
use tracing::{debug, info, warn};

use crate::store::TaskStore;
use crate::task::Task;

pub const CURRENT_PAGE_KEY: &str = "currentPagePosition";
pub const LENGTH_KEY: &str = "taskListLength";
pub const TASK_KEY_PREFIX: &str = "task";

/// Upper bound on a stored `taskListLength`. Larger values are treated
/// as corrupt.
pub const MAX_STORED_TASKS: usize = 10_000;

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove_item(&mut self, key: &str) -> anyhow::Result<()>;
}

/// In-memory storage for tests and headless use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage key names, optionally namespaced by a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn current_page(&self) -> String {
        format!("{}{CURRENT_PAGE_KEY}", self.prefix)
    }

    pub fn length(&self) -> String {
        format!("{}{LENGTH_KEY}", self.prefix)
    }

    pub fn task(&self, index: usize) -> String {
        format!("{}{TASK_KEY_PREFIX}{index}", self.prefix)
    }
}

/// Compacts the store, then writes page, length and one JSON entry per task.
#[tracing::instrument(skip(store, storage), fields(len = store.len()))]
pub fn save(
    store: &mut TaskStore,
    storage: &mut impl KeyValueStore,
    keys: &StorageKeys,
) -> anyhow::Result<()> {
    store.compact();

    let previous_len = read_length(storage, keys).unwrap_or(0);

    storage
        .set_item(&keys.current_page(), &store.current_page().position().to_string())
        .context("failed writing current page")?;
    storage
        .set_item(&keys.length(), &store.len().to_string())
        .context("failed writing task list length")?;

    for (index, task) in store.iter() {
        let serialized = serde_json::to_string(task)?;
        storage
            .set_item(&keys.task(index), &serialized)
            .with_context(|| format!("failed writing task entry {index}"))?;
    }

    for stale in store.len()..previous_len {
        storage
            .remove_item(&keys.task(stale))
            .with_context(|| format!("failed removing stale task entry {stale}"))?;
    }

    info!(
        tasks = store.len(),
        stale = previous_len.saturating_sub(store.len()),
        page = store.current_page().position(),
        "saved task list"
    );
    Ok(())
}

/// Reads the stored slots. A missing length means an empty list; a
/// missing or `null` entry inside the range becomes a hole.
#[tracing::instrument(skip(storage))]
pub fn try_load(
    storage: &impl KeyValueStore,
    keys: &StorageKeys,
) -> anyhow::Result<Vec<Option<Task>>> {
    let len = read_length(storage, keys)?;
    debug!(len, "loading task entries");

    let mut slots = Vec::new();
    for index in 0..len {
        let key = keys.task(index);
        let raw = storage
            .get_item(&key)
            .with_context(|| format!("failed reading {key}"))?;
        let slot = match raw {
            Some(raw) => serde_json::from_str::<Option<Task>>(&raw)
                .with_context(|| format!("failed parsing {key}"))?,
            None => None,
        };
        slots.push(slot);
    }

    Ok(slots)
}

/// Replaces the store contents from storage. Malformed task data starts
/// an empty list; the page is restored either way.
#[tracing::instrument(skip(store, storage))]
pub fn load_into(store: &mut TaskStore, storage: &impl KeyValueStore, keys: &StorageKeys) {
    store.clear();

    match try_load(storage, keys) {
        Ok(slots) => {
            for task in slots {
                match task {
                    Some(task) => {
                        store.add(task);
                    }
                    None => store.push_hole(),
                }
            }
        }
        Err(error) => {
            warn!(?error, "stored task list unreadable; starting empty");
        }
    }

    let page = match storage.get_item(&keys.current_page()) {
        Ok(raw) => raw,
        Err(error) => {
            warn!(%error, "failed reading current page; defaulting");
            None
        }
    };
    store.set_current_page_raw(page.as_deref());

    info!(
        tasks = store.total_count(),
        len = store.len(),
        page = store.current_page().position(),
        "loaded task list"
    );
}

fn read_length(storage: &impl KeyValueStore, keys: &StorageKeys) -> anyhow::Result<usize> {
    let Some(raw) = storage
        .get_item(&keys.length())
        .context("failed reading task list length")?
    else {
        return Ok(0);
    };

    let len = raw
        .trim()
        .parse::<usize>()
        .map_err(|err| anyhow!("invalid task list length {raw:?}: {err}"))?;
    if len > MAX_STORED_TASKS {
        return Err(anyhow!(
            "task list length {len} exceeds limit of {MAX_STORED_TASKS}"
        ));
    }
    Ok(len)
}
