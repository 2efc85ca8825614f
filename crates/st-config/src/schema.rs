//! Property file schema definitions.

use serde::{Deserialize, Serialize};
use st_transport::{Record, WaterTransport};
use std::collections::BTreeMap;

/// Newest property file version this crate reads and writes.
pub const LATEST_VERSION: u32 = 1;

/// A named set of transport model records.
///
/// Each component is a flat record of the keys the evaluator and its base
/// recognize (`pMin`, `pMax`, `nMoles`, `molWeight`, `TMin`, `TMax`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub components: BTreeMap<String, Record>,
}

impl PropertyFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            components: BTreeMap::new(),
        }
    }

    /// Add (or replace) a component from an evaluator's own record.
    pub fn insert_evaluator(&mut self, name: impl Into<String>, evaluator: &WaterTransport) {
        self.components.insert(name.into(), evaluator.to_record());
    }

    pub fn component(&self, name: &str) -> Option<&Record> {
        self.components.get(name)
    }

    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}
