use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    /// Spelling of the domain as it appeared in the source table.
    pub domain: Arc<str>,
    pub address: Arc<str>,
}

/// Case-insensitive `domain -> address` table, built once and read-only after.
///
/// Duplicate domains follow last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct AddressTable {
    entries: HashMap<Box<str>, AddressEntry>,
}

impl AddressTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry replaced by this insert, if any.
    pub fn insert(&mut self, domain: &str, address: &str) -> Option<AddressEntry> {
        self.entries.insert(
            domain.to_ascii_lowercase().into_boxed_str(),
            AddressEntry {
                domain: domain.into(),
                address: address.into(),
            },
        )
    }

    pub fn lookup(&self, domain: &str) -> Option<&AddressEntry> {
        self.entries.get(domain.to_ascii_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AddressTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (domain, address) in iter {
            table.insert(domain, address);
        }
        table
    }
}
