//! Linear record pipeline: map → unpivot → shape.
//!
//! Each stage is optional in the document: an empty mapper leaves records as
//! they are, an unpivot without pivots passes records through, and without a
//! prototype the expanded records are returned unshaped.

use recast_core::{Key, Record, Value};
use recast_expand::Unpivot;
use recast_shape::{Mapper, Prototype};

use crate::dsl::yaml::Document;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    mapper: Mapper,
    unpivot: Unpivot,
    prototype: Option<Prototype<Key, Value>>,
}

impl Pipeline {
    pub fn new(
        mapper: Mapper,
        unpivot: Unpivot,
        prototype: Option<Prototype<Key, Value>>,
    ) -> Self {
        Self {
            mapper,
            unpivot,
            prototype,
        }
    }

    pub fn from_document(doc: &Document) -> Result<Self> {
        Ok(Self::new(doc.mapper()?, doc.unpivot()?, doc.prototype()))
    }

    pub fn mapper_mut(&mut self) -> &mut Mapper {
        &mut self.mapper
    }

    pub fn unpivot(&self) -> &Unpivot {
        &self.unpivot
    }

    /// Run one record through every stage.
    ///
    /// Shaping is strict: an expanded field the prototype does not declare
    /// fails the call with `KeyOutOfBounds`.
    pub fn process(&self, record: &Record) -> Result<Vec<Record>> {
        let mapped = self.mapper.map(record);
        let expanded = self.unpivot.expand(&mapped);
        match &self.prototype {
            None => Ok(expanded),
            Some(prototype) => Ok(expanded
                .iter()
                .map(|r| prototype.make_strict(r))
                .collect::<recast_core::Result<Vec<_>>>()?),
        }
    }

    pub fn process_all<'a, I>(&self, records: I) -> Result<Vec<Record>>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut out = Vec::new();
        for record in records {
            out.extend(self.process(record)?);
        }
        Ok(out)
    }
}
