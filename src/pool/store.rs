//! # Population Store
//!
//! The chromosomes submitted during the current epoch. Entries are kept in a
//! dense vector in insertion order with a side index from encoding to slot,
//! which gives O(1) upsert, O(1) uniform sampling and deterministic dumps.
//! Entries are never removed one by one; the whole store is cleared when an
//! epoch ends.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    error::{OptionExt, PoolError, Result},
    rng::RandomNumberGenerator,
};

/// A chromosome and the fitness its submitter reported for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromosomeEntry {
    pub chromosome: String,
    pub fitness: u64,
}

/// Ordered snapshot of the population, encoding to fitness.
///
/// Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationDump(Vec<(String, u64)>);

impl PopulationDump {
    /// Number of chromosomes in the snapshot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fitness recorded for `chromosome`. Linear scan; snapshots are read
    /// once and thrown away.
    pub fn get(&self, chromosome: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(key, _)| key == chromosome)
            .map(|(_, fitness)| *fitness)
    }

    pub fn contains(&self, chromosome: &str) -> bool {
        self.get(chromosome).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(key, fitness)| (key.as_str(), *fitness))
    }
}

impl Serialize for PopulationDump {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(key, fitness)| (key, fitness)))
    }
}

/// Chromosomes of the current epoch keyed by encoding.
///
/// Not synchronized; the [`Coordinator`](super::Coordinator) owns the only
/// instance and guards it.
#[derive(Debug, Default)]
pub struct PopulationStore {
    entries: Vec<ChromosomeEntry>,
    index: HashMap<String, usize>,
}

impl PopulationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `chromosome` or overwrites its fitness.
    ///
    /// Returns `true` when the chromosome was not present. Overwrites are
    /// last-write-wins, even when the new fitness is lower.
    pub fn upsert(&mut self, chromosome: &str, fitness: u64) -> bool {
        match self.index.get(chromosome) {
            Some(&slot) => {
                self.entries[slot].fitness = fitness;
                false
            }
            None => {
                self.index.insert(chromosome.to_string(), self.entries.len());
                self.entries.push(ChromosomeEntry {
                    chromosome: chromosome.to_string(),
                    fitness,
                });
                true
            }
        }
    }

    /// Current fitness of `chromosome`, if it was submitted this epoch.
    pub fn get(&self, chromosome: &str) -> Option<u64> {
        self.index
            .get(chromosome)
            .map(|&slot| self.entries[slot].fitness)
    }

    /// Draws one entry uniformly at random.
    ///
    /// # Errors
    ///
    /// `PoolError::EmptyPopulation` when the store holds no entries.
    pub fn sample_random(&self, rng: &mut RandomNumberGenerator) -> Result<ChromosomeEntry> {
        let slot = rng
            .index(self.entries.len())
            .ok_or_else_pool(|| PoolError::EmptyPopulation)?;
        Ok(self.entries[slot].clone())
    }

    /// Number of distinct chromosomes stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies every entry, in insertion order, into a detached snapshot.
    pub fn dump_all(&self) -> PopulationDump {
        PopulationDump(
            self.entries
                .iter()
                .map(|entry| (entry.chromosome.clone(), entry.fitness))
                .collect(),
        )
    }

    /// Drops every entry. Used only when an epoch ends.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
