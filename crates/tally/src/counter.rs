//! Running counters.

/// Accumulates the character count of every word added.
///
/// The count can be read but only changed through [`add_word`](Self::add_word).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthCounter {
    count: usize,
}

impl LengthCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: &str) {
        self.count += word.chars().count();
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Counts operations performed across repeated runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationCounter {
    performed: u64,
}

impl OperationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn perform(&mut self) {
        self.performed += 1;
    }

    /// Performs `times` operations and returns the cumulative total.
    pub fn run(&mut self, times: u64) -> u64 {
        for _ in 0..times {
            self.perform();
        }
        tracing::info!(performed = self.performed, "operation performed cumulatively");
        self.performed
    }

    pub fn performed(&self) -> u64 {
        self.performed
    }
}
