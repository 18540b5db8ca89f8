//! # Contributor Registry
//!
//! Remote addresses that submitted at least one chromosome during the
//! current epoch.

use std::collections::BTreeSet;

use serde::Serialize;

/// Sorted set of contributor addresses.
///
/// Serializes as a JSON object mapping each address to `1`, the shape
/// volunteer dashboards already consume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorList(BTreeSet<String>);

impl ContributorList {
    /// Number of distinct contributors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, address: &str) -> bool {
        self.0.contains(address)
    }

    /// Addresses in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Serialize for ContributorList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.0.iter().map(|address| (address, 1u8)))
    }
}

/// Addresses that contributed during the current epoch.
#[derive(Debug, Default)]
pub struct ContributorRegistry {
    addresses: BTreeSet<String>,
}

impl ContributorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `address`. Recording the same address again has no effect.
    pub fn record(&mut self, address: &str) {
        if !self.addresses.contains(address) {
            self.addresses.insert(address.to_string());
        }
    }

    /// Snapshot of every recorded address.
    pub fn list_all(&self) -> ContributorList {
        ContributorList(self.addresses.clone())
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Forgets every address. Called together with the store reset.
    pub fn clear(&mut self) {
        self.addresses.clear();
    }
}
