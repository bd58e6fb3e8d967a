//! How a value is pulled out of a record: by key, or by a caller-supplied closure.

use std::fmt;
use std::sync::Arc;

use recast_core::{Key, Record, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

type ExtractFn = dyn Fn(&Record) -> Value + Send + Sync;

/// Chosen at configuration time; documents can only express the `Key` form.
#[derive(Clone)]
pub enum Accessor {
    Key(Key),
    Func(Arc<ExtractFn>),
}

impl Accessor {
    pub fn key(key: impl Into<Key>) -> Self {
        Accessor::Key(key.into())
    }

    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        Accessor::Func(Arc::new(f))
    }

    /// Missing keys extract as `Value::Null`.
    pub fn extract(&self, record: &Record) -> Value {
        match self {
            Accessor::Key(key) => record.get(key).cloned().unwrap_or_default(),
            Accessor::Func(f) => f(record),
        }
    }

    pub fn as_key(&self) -> Option<&Key> {
        match self {
            Accessor::Key(key) => Some(key),
            Accessor::Func(_) => None,
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Accessor::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<&str> for Accessor {
    fn from(key: &str) -> Self {
        Accessor::key(key)
    }
}

impl From<String> for Accessor {
    fn from(key: String) -> Self {
        Accessor::Key(key)
    }
}

impl<'de> Deserialize<'de> for Accessor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Key::deserialize(deserializer).map(Accessor::Key)
    }
}

impl Serialize for Accessor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Accessor::Key(key) => serializer.serialize_str(key),
            Accessor::Func(_) => Err(serde::ser::Error::custom(
                "closure accessors cannot be serialized",
            )),
        }
    }
}
