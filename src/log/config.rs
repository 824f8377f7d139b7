use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on the number of records the log will hold. `None` is unbounded.
    #[serde(default)]
    max_records: Option<u64>,
    /// Record slots allocated up front. Ignored if the allocation fails.
    #[serde(default)]
    initial_capacity: usize,
}

impl Config {
    pub fn get_max_records(&self) -> Option<u64> {
        self.max_records
    }

    pub fn get_initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the configured bound when a log holding `len` records has reached it.
    pub(crate) fn limit_reached(&self, len: u64) -> Option<u64> {
        self.max_records.filter(|max| len >= *max)
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    max_records: Option<u64>,
    initial_capacity: usize,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_records(mut self, max: u64) -> Self {
        self.max_records = Some(max);
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        Config {
            max_records: self.max_records,
            initial_capacity: self.initial_capacity,
        }
    }
}
