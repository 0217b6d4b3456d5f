use std::any::Any;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OPAQUE: AtomicU64 = AtomicU64::new(1);

/// One intent parameter: a shared value plus the text it contributes to a
/// [`Location`](crate::Location).
#[derive(Clone)]
pub struct Param {
    value: Arc<dyn Any + Send + Sync>,
    encoded: String,
}

impl Param {
    pub fn new<T: fmt::Display + Any + Send + Sync>(value: T) -> Self {
        let encoded = value.to_string();
        Self {
            value: Arc::new(value),
            encoded,
        }
    }

    /// Wraps a value that has no textual form (a reply channel, a filter
    /// callback). It is encoded by a process-wide sequence number, so clones
    /// compare equal and independently created values never do, even after
    /// earlier ones are dropped.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        let seq = NEXT_OPAQUE.fetch_add(1, Ordering::Relaxed);
        Self {
            value: Arc::new(value),
            encoded: format!("opaque-{seq}"),
        }
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Param").field(&self.encoded).finish()
    }
}

/// Intent parameters, kept sorted by key so that encoding is stable.
#[derive(Clone, Debug, Default)]
pub struct Params {
    entries: BTreeMap<String, Param>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: fmt::Display + Any + Send + Sync>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> Option<Param> {
        self.entries.insert(key.into(), Param::new(value))
    }

    pub fn insert_opaque<T: Any + Send + Sync>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> Option<Param> {
        self.entries.insert(key.into(), Param::opaque(value))
    }

    pub fn insert_param(&mut self, key: impl Into<String>, param: Param) -> Option<Param> {
        self.entries.insert(key.into(), param)
    }

    pub fn remove(&mut self, key: &str) -> Option<Param> {
        self.entries.remove(key)
    }

    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key)?.downcast_ref::<T>()
    }

    /// The encoded text of a parameter, whatever its type.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(Param::encoded)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Param> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Param);
    type IntoIter = btree_map::Iter<'a, String, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
