/// Counts completed searches. Starts at zero and only ever moves forward by
/// one, when a win closes the current epoch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EpochSequencer {
    current: u64,
}

impl EpochSequencer {
    /// A sequencer at epoch 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the running epoch.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Moves to the next epoch and returns its number.
    pub fn advance(&mut self) -> u64 {
        self.current += 1;
        self.current
    }
}
