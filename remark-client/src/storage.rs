use std::collections::HashMap;

use crate::api::{Comment, Error};

/// String key-value store the comments get persisted into
pub trait Backend {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
    read_only: bool,
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> MemoryBackend {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    /// While read-only, every write fails like a full browser quota would
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

impl Backend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Error> {
        if self.read_only {
            return Err(Error::Storage(format!("key {key:?} is read-only")));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The whole comment collection, kept as one JSON array under a single key
pub struct CommentStore<B> {
    backend: B,
    key: String,
}

impl<B: Backend> CommentStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> CommentStore<B> {
        CommentStore {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn load_all(&self) -> Result<Vec<Comment>, Error> {
        match self.backend.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(blob) => {
                serde_json::from_str(&blob).map_err(|e| Error::CorruptStorage(e.to_string()))
            }
        }
    }

    /// Overwrites the stored blob with a single write
    pub fn save_all(&mut self, records: &[Comment]) -> Result<(), Error> {
        let blob = serde_json::to_string(records)
            .map_err(|e| Error::Storage(format!("encoding comments: {e}")))?;
        self.backend.set_item(&self.key, &blob)
    }
}
