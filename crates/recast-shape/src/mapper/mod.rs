//! Lookup-driven record augmentation.
//!
//! A `Mapper` holds several constant-time lookups and maps a record through all
//! of them, filling in (or overwriting) one field per mapping. Its main use is
//! resolving codes or names in incoming rows to the ids of reference records.

pub mod accessor;
pub mod lookup;
pub mod mapping;

use indexmap::IndexMap;
use recast_core::{Error, Key, Record, Result};

pub use accessor::Accessor;
pub use lookup::{Lookup, LookupConfig};
pub use mapping::{Mapping, MappingConfig};

#[derive(Debug, Clone, Default)]
pub struct Mapper {
    mappings_by_name: IndexMap<Key, Mapping>,
}

impl Mapper {
    /// Mappings are applied in the given order. Lookup names must be unique.
    pub fn new<I>(mappings: I) -> Result<Self>
    where
        I: IntoIterator<Item = Mapping>,
    {
        let mut mappings_by_name = IndexMap::new();
        for mapping in mappings {
            let name = mapping.name().clone();
            if mappings_by_name.contains_key(&name) {
                return Err(Error::Config(format!("duplicate lookup name '{name}'")));
            }
            mappings_by_name.insert(name, mapping);
        }
        Ok(Self { mappings_by_name })
    }

    pub fn from_configs<I>(configs: I) -> Result<Self>
    where
        I: IntoIterator<Item = MappingConfig>,
    {
        let mappings = configs
            .into_iter()
            .map(Mapping::from_config)
            .collect::<Result<Vec<_>>>()?;
        Mapper::new(mappings)
    }

    /// Add a reference record to the lookup called `name`.
    pub fn add(&mut self, name: &str, object: Record) -> Result<&mut Self> {
        self.mapping_mut(name)?.add(object);
        Ok(self)
    }

    pub fn add_each<I>(&mut self, name: &str, objects: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Record>,
    {
        self.mapping_mut(name)?.add_each(objects);
        Ok(self)
    }

    pub fn mapping(&self, name: &str) -> Option<&Mapping> {
        self.mappings_by_name.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &Key> {
        self.mappings_by_name.keys()
    }

    pub fn len(&self) -> usize {
        self.mappings_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings_by_name.is_empty()
    }

    /// Shallow copy of `record` with every mapping applied.
    pub fn map(&self, record: &Record) -> Record {
        let mut out = record.clone();
        self.map_in_place(&mut out);
        out
    }

    /// An absent record maps like an empty one.
    pub fn map_nullable(&self, record: Option<&Record>) -> Record {
        match record {
            Some(record) => self.map(record),
            None => self.map(&Record::new()),
        }
    }

    pub fn map_in_place(&self, record: &mut Record) {
        for mapping in self.mappings_by_name.values() {
            mapping.map_in_place(record);
        }
    }

    fn mapping_mut(&mut self, name: &str) -> Result<&mut Mapping> {
        if name.trim().is_empty() {
            return Err(Error::config("name is required"));
        }
        self.mappings_by_name
            .get_mut(name)
            .ok_or_else(|| Error::Config(format!("unknown lookup '{name}'")))
    }
}
