//! Per-page scrape output: field values, raw records, and header bookkeeping.

use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered set of `label -> text` pairs, one item of a satellite list
/// (a news headline, an analyst rating, an insider trade).
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labeled(Vec<(String, String)>);

impl Labeled {
    /// An empty item.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a field. A repeated label replaces the earlier value in place.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(l, _)| *l == label) {
            slot.1 = value;
        } else {
            self.0.push((label, value));
        }
    }

    /// Builder-style [`Labeled::push`].
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(label, value);
        self
    }

    /// Value for `label`, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the item has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Labeled {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// A single scraped cell before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldValue {
    /// Plain text as shown on the page.
    Text(String),
    /// The field is known to exist for this view but carries no value.
    Absent,
    /// A list of labeled items from a satellite block.
    List(Vec<Labeled>),
    /// Nested markup the scraper could not flatten (a table inside a cell).
    /// The table assembler rejects it.
    Markup(String),
}

impl FieldValue {
    /// Short description of the value's shape for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Absent => "absent",
            Self::List(_) => "list",
            Self::Markup(_) => "nested markup",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Labeled>> for FieldValue {
    fn from(value: Vec<Labeled>) -> Self {
        Self::List(value)
    }
}

/// Header name under which every scraper stores the row's primary key.
pub const TICKER_HEADER: &str = "Ticker";

/// One scraped row keyed by header name. Missing keys mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, FieldValue>,
}

impl RawRecord {
    /// An empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(header.into(), value.into());
    }

    /// Builder-style [`RawRecord::insert`].
    #[must_use]
    pub fn with(mut self, header: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(header, value);
        self
    }

    /// Value stored under `header`.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&FieldValue> {
        self.fields.get(header)
    }

    /// The row's ticker, when it was scraped as text.
    #[must_use]
    pub fn ticker(&self) -> Option<&str> {
        match self.fields.get(TICKER_HEADER) {
            Some(FieldValue::Text(t)) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Header names present on this record, in no particular order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Insertion-ordered, de-duplicated list of header names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl HeaderSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `header` unless already present. Returns whether it was added.
    pub fn insert(&mut self, header: &str) -> bool {
        if self.seen.contains(header) {
            return false;
        }
        self.seen.insert(header.to_string());
        self.order.push(header.to_string());
        true
    }

    /// Whether `header` is present.
    #[must_use]
    pub fn contains(&self, header: &str) -> bool {
        self.seen.contains(header)
    }

    /// Headers in first-seen order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Consume into the ordered header list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }

    /// Number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> Extend<&'a str> for HeaderSet {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for h in iter {
            self.insert(h);
        }
    }
}

impl<'a> FromIterator<&'a str> for HeaderSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// What a single page scrape produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    /// Records in document order.
    pub rows: Vec<RawRecord>,
    /// Headers in first-seen order for this page.
    pub headers: Vec<String>,
    /// Total number of pages the upstream reports for the result set.
    pub page_count: usize,
}
