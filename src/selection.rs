//! Selection trees: which fields were explicitly requested or expanded.
//!
//! A [`SelectionNode`] is built by an upstream query phase (outside this
//! crate) and handed to the projection wrapper. Each entry names a field and
//! optionally carries a pre-materialized value: an expanded sub-entity that
//! was already computed during query evaluation. Entries without a value mean
//! "include the raw instance value"; they contribute nothing to flattening
//! and are picked up from the instance during materialization instead.
//!
//! Entries pulled in implicitly by expansion policy (key fields needed for a
//! relationship link, for example) are marked `auto_selected` so callers can
//! include or exclude them per use: targeted field lookup wants them,
//! "only what was explicitly requested" output does not.

use serde_json::{Map, Value};

use crate::mapper::NameMapper;

/// One selected or expanded field.
#[derive(Debug, Clone)]
pub struct SelectionEntry {
    /// Schema property name
    pub name: String,

    /// Pre-materialized value for expanded fields; `None` means the raw
    /// instance value should be used
    pub value: Option<Value>,

    /// True when expansion policy pulled this entry in implicitly
    pub auto_selected: bool,
}

/// Ordered tree of explicitly selected/expanded fields for one instance.
#[derive(Debug, Clone, Default)]
pub struct SelectionNode {
    entries: Vec<SelectionEntry>,
}

impl SelectionNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an explicit selection of the raw instance value.
    pub fn select(mut self, name: impl Into<String>) -> Self {
        self.entries.push(SelectionEntry {
            name: name.into(),
            value: None,
            auto_selected: false,
        });
        self
    }

    /// Adds an explicitly expanded field with its pre-materialized value.
    pub fn expand(mut self, name: impl Into<String>, value: Value) -> Self {
        self.entries.push(SelectionEntry {
            name: name.into(),
            value: Some(value),
            auto_selected: false,
        });
        self
    }

    /// Adds an auto-selected field with its pre-materialized value.
    pub fn expand_auto(mut self, name: impl Into<String>, value: Value) -> Self {
        self.entries.push(SelectionEntry {
            name: name.into(),
            value: Some(value),
            auto_selected: true,
        });
        self
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the tree into a name → value mapping, in entry order.
    ///
    /// Only entries holding a pre-materialized value are emitted. Entries
    /// flagged `auto_selected` are skipped unless `include_auto_selected`
    /// is set. Names go through `mapper`; a mapper that yields no usable
    /// name for an entry leaves the entry under its schema name rather
    /// than dropping data.
    pub fn flatten(
        &self,
        mapper: &dyn NameMapper,
        include_auto_selected: bool,
    ) -> Map<String, Value> {
        let mut fields = Map::new();
        for entry in &self.entries {
            if entry.auto_selected && !include_auto_selected {
                continue;
            }
            let Some(value) = &entry.value else {
                continue;
            };
            let name = match mapper.map(&entry.name) {
                Some(mapped) if !mapped.trim().is_empty() => mapped,
                _ => entry.name.clone(),
            };
            fields.insert(name, value.clone());
        }
        fields
    }
}
