//! Import records.

/// Symbols imported from one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    /// Source module.
    pub from: String,
    /// Imported symbols, deduplicated, in first-request order.
    pub items: Vec<String>,
}

/// The deduplicated, insertion-ordered imports of one class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportRecord {
    entries: Vec<ImportEntry>,
}

impl ImportRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `item` as imported from `from`.
    ///
    /// A known module gains the symbol once; an unknown module gets a new entry.
    pub fn register(&mut self, item: impl Into<String>, from: impl Into<String>) {
        let item = item.into();
        let from = from.into();
        match self.entries.iter_mut().find(|e| e.from == from) {
            Some(entry) => {
                if !entry.items.contains(&item) {
                    entry.items.push(item);
                }
            }
            None => self.entries.push(ImportEntry {
                from,
                items: vec![item],
            }),
        }
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[ImportEntry] {
        &self.entries
    }

    /// Get the entry for a module.
    pub fn get(&self, from: &str) -> Option<&ImportEntry> {
        self.entries.iter().find(|e| e.from == from)
    }

    /// Check whether `item` is imported from `from`.
    pub fn contains(&self, item: &str, from: &str) -> bool {
        self.get(from).is_some_and(|e| e.items.iter().any(|i| i == item))
    }

    /// Number of distinct modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is imported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
