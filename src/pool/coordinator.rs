use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::{
    contributors::{ContributorList, ContributorRegistry},
    epoch::EpochSequencer,
    store::{ChromosomeEntry, PopulationDump, PopulationStore},
};
use crate::{
    config::Config,
    error::Result,
    fitness::Fitness,
    rng::RandomNumberGenerator,
    termination::Termination,
};

/// What a submission did to the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The chromosome was added or its fitness overwritten.
    Stored {
        /// Population size after the submission.
        length: usize,
        chromosome: String,
        /// `true` when the chromosome was already present.
        updated: bool,
    },
    /// The chromosome solved the problem. The pool was emptied and `epoch`
    /// is the number of the epoch that just started.
    Solved { epoch: u64 },
}

impl SubmitOutcome {
    /// Population size after the submission; zero after a win.
    pub fn length(&self) -> usize {
        match self {
            SubmitOutcome::Stored { length, .. } => *length,
            SubmitOutcome::Solved { .. } => 0,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SubmitOutcome::Solved { .. })
    }
}

/// Everything observable about the pool at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub epoch: u64,
    pub population: PopulationDump,
    pub contributors: ContributorList,
}

#[derive(Debug)]
struct PoolState {
    store: PopulationStore,
    contributors: ContributorRegistry,
    epoch: EpochSequencer,
    rng: RandomNumberGenerator,
}

/// Owns the shared population and serializes every access to it.
///
/// Store, contributor registry, epoch counter and the sampling RNG sit behind
/// a single mutex, held for exactly one submission or one read. A reader
/// therefore sees either the state before a reset or the state after it,
/// never a mix. Nothing inside the lock blocks or awaits.
#[derive(Debug)]
pub struct Coordinator {
    termination: Termination,
    cache_size: usize,
    state: Mutex<PoolState>,
}

impl Coordinator {
    /// Creates an empty pool at epoch 0 for the given configuration.
    ///
    /// # Errors
    ///
    /// `PoolError::Configuration` if `config` does not pass
    /// [`Config::validate`]. A zero target would turn every submission into
    /// a win.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_rng(config, RandomNumberGenerator::new())
    }

    /// Like [`Coordinator::new`] with an explicit sampling RNG, for
    /// reproducible runs.
    pub fn with_rng(config: &Config, rng: RandomNumberGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            Termination::from_vars(config.vars()),
            config.vars().cache_size(),
            rng,
        ))
    }

    /// Builds a coordinator from an already resolved termination rule.
    ///
    /// The rule is taken as given; `Termination::new(0)` makes every
    /// evaluated submission a win.
    pub fn from_parts(
        termination: Termination,
        cache_size: usize,
        rng: RandomNumberGenerator,
    ) -> Self {
        Self {
            termination,
            cache_size,
            state: Mutex::new(PoolState {
                store: PopulationStore::new(),
                contributors: ContributorRegistry::new(),
                epoch: EpochSequencer::new(),
                rng,
            }),
        }
    }

    /// The rule deciding which submissions end the epoch.
    pub fn termination(&self) -> &Termination {
        &self.termination
    }

    /// The advisory population size clients aim for. Never enforced.
    pub fn cache_size(&self) -> usize {
        self.cache_size
    }

    // Every mutation leaves the state consistent, so a poisoned lock is safe
    // to keep using.
    fn lock(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a submission of `chromosome` with `fitness` from `address`.
    ///
    /// A winning submission clears the population and the contributor list
    /// and starts a new epoch; the winner itself is not kept. Any other
    /// submission is upserted and its address recorded.
    pub fn submit(&self, chromosome: &str, fitness: Fitness, address: &str) -> SubmitOutcome {
        let fitness = fitness.value();
        let solved = self.termination.is_solution(chromosome, Some(fitness));

        let mut state = self.lock();

        if solved {
            state.store.clear();
            state.contributors.clear();
            let epoch = state.epoch.advance();
            drop(state);

            info!(
                chromosome,
                fitness,
                address,
                epoch,
                "solution found, population reset"
            );
            return SubmitOutcome::Solved { epoch };
        }

        let is_new = state.store.upsert(chromosome, fitness);
        state.contributors.record(address);
        let length = state.store.len();
        drop(state);

        debug!(chromosome, fitness, address, length, updated = !is_new, "chromosome stored");
        if is_new && length == self.cache_size {
            info!(length, "population reached the advisory cache size");
        }

        SubmitOutcome::Stored {
            length,
            chromosome: chromosome.to_string(),
            updated: !is_new,
        }
    }

    /// Parses `fitness` and submits.
    ///
    /// # Errors
    ///
    /// `PoolError::InvalidFitness` if `fitness` is not a non-negative
    /// integer. Parsing happens before the lock is taken, so a rejected
    /// submission leaves the pool untouched.
    pub fn submit_raw(&self, chromosome: &str, fitness: &str, address: &str) -> Result<SubmitOutcome> {
        let fitness: Fitness = fitness.parse()?;
        Ok(self.submit(chromosome, fitness, address))
    }

    /// Draws one chromosome uniformly at random from the current population.
    ///
    /// # Errors
    ///
    /// `PoolError::EmptyPopulation` if there are no chromosomes.
    pub fn sample_random(&self) -> Result<ChromosomeEntry> {
        let mut state = self.lock();
        let PoolState { store, rng, .. } = &mut *state;
        store.sample_random(rng)
    }

    /// Every chromosome of the current epoch with its fitness, in
    /// submission order.
    pub fn dump_all(&self) -> PopulationDump {
        self.lock().store.dump_all()
    }

    /// Addresses that submitted during the current epoch.
    pub fn contributors(&self) -> ContributorList {
        self.lock().contributors.list_all()
    }

    /// Number of the current epoch, i.e. how many wins have been seen.
    pub fn epoch(&self) -> u64 {
        self.lock().epoch.current()
    }

    /// Number of chromosomes in the current epoch.
    pub fn len(&self) -> usize {
        self.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().store.is_empty()
    }

    /// Epoch, population and contributors read under a single lock.
    pub fn snapshot(&self) -> PoolSnapshot {
        let state = self.lock();
        PoolSnapshot {
            epoch: state.epoch.current(),
            population: state.store.dump_all(),
            contributors: state.contributors.list_all(),
        }
    }
}
