use std::collections::HashMap;

use recast_core::{Key, Record, Value};
use serde::{Deserialize, Serialize};

use super::accessor::Accessor;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupConfig {
    pub name: Key,
    pub by: Accessor,
}

/// Named, constant-time index of reference records, keyed by `by(record)`.
///
/// Adding a second record with the same id replaces the first.
#[derive(Debug, Clone)]
pub struct Lookup {
    name: Key,
    by: Accessor,
    objects: HashMap<Value, Record>,
}

impl Lookup {
    pub fn new(name: impl Into<Key>, by: impl Into<Accessor>) -> Self {
        Self {
            name: name.into(),
            by: by.into(),
            objects: HashMap::new(),
        }
    }

    pub fn name(&self) -> &Key {
        &self.name
    }

    pub fn by(&self) -> &Accessor {
        &self.by
    }

    pub fn add(&mut self, object: Record) -> &mut Self {
        let id = self.by.extract(&object);
        self.objects.insert(id, object);
        self
    }

    pub fn add_each<I>(&mut self, objects: I) -> &mut Self
    where
        I: IntoIterator<Item = Record>,
    {
        for object in objects {
            self.add(object);
        }
        self
    }

    pub fn get(&self, id: &Value) -> Option<&Record> {
        self.objects.get(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl From<LookupConfig> for Lookup {
    fn from(config: LookupConfig) -> Self {
        Lookup::new(config.name, config.by)
    }
}
