//! Sparse two-dimensional store keyed by arbitrary row and field identifiers.
//!
//! Picture a table where fields are the X axis and rows the Y axis. Cells are
//! written one at a time with `add(row_id, field_id, value)`; reading the table
//! back yields every touched row, shaped by the prototype so unset fields hold
//! the prototype's base value. Row and field ids can be any `Eq + Hash` type.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use recast_core::{Error, Record, Result};
use serde::Serialize;

use crate::prototype::Prototype;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row<R, F, V>
where
    F: Eq + Hash,
{
    pub row_id: R,
    pub fields: Record<F, V>,
}

#[derive(Debug, Clone)]
pub struct Table<R, F, V>
where
    F: Eq + Hash,
{
    prototype: Prototype<F, V>,
    lookup: IndexMap<R, Record<F, V>>,
}

impl<R, F, V> Table<R, F, V>
where
    R: Eq + Hash + Clone,
    F: Eq + Hash + Clone + Debug,
    V: Clone,
{
    pub fn new(prototype: Prototype<F, V>) -> Self {
        Self {
            prototype,
            lookup: IndexMap::new(),
        }
    }

    pub fn prototype(&self) -> &Prototype<F, V> {
        &self.prototype
    }

    /// Set one cell. Rows keep first-write order; rewriting a cell replaces its value.
    pub fn add(&mut self, row_id: R, field_id: F, value: V) -> Result<&mut Self> {
        if !self.prototype.contains_key(&field_id) {
            return Err(Error::KeyOutOfBounds(format!(
                "field_id: {field_id:?} not allowed."
            )));
        }

        self.lookup
            .entry(row_id)
            .or_default()
            .insert(field_id, value);
        Ok(self)
    }

    pub fn get(&self, row_id: &R, field_id: &F) -> Option<&V> {
        self.lookup.get(row_id)?.get(field_id)
    }

    /// Every touched row, fully shaped by the prototype.
    pub fn rows(&self) -> Vec<Row<R, F, V>> {
        // Fields were checked against the prototype on `add`, so the lenient
        // overlay never drops anything here.
        self.lookup
            .iter()
            .map(|(row_id, fields)| Row {
                row_id: row_id.clone(),
                fields: self.prototype.make(fields),
            })
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &F> {
        self.prototype.keys()
    }

    pub fn contains_key(&self, field_id: &F) -> bool {
        self.prototype.contains_key(field_id)
    }

    /// Number of touched rows.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
