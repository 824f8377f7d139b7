use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, trace};

use super::config::Config;
use crate::models::Record;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("offset {0} not found")]
    OffsetNotFound(u64),

    #[error("log is full: {max_records} records")]
    LogFull { max_records: u64 },
}

/// Append-only sequence of [`Record`]s addressed by offset.
///
/// A record's offset is its position in the sequence. Every call, read or
/// write, takes the same lock, so calls from different threads behave as if
/// they ran one at a time. Share it across threads with an `Arc<Log>`.
#[derive(Debug)]
pub struct Log {
    config: Config,
    records: Mutex<Vec<Record>>,
}

impl Log {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        debug!(
            max_records = ?config.get_max_records(),
            initial_capacity = config.get_initial_capacity(),
            "creating log"
        );
        let mut records = Vec::new();
        if let Err(e) = records.try_reserve(config.get_initial_capacity()) {
            debug!(error = %e, "ignoring initial capacity");
        }
        Log {
            records: Mutex::new(records),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stores `record` at the end of the log and returns its offset.
    ///
    /// The caller's `offset` is overwritten. Only fails when a `max_records`
    /// bound is configured and already reached.
    pub fn append(&self, mut record: Record) -> Result<u64, LogError> {
        let len = record.value.len();
        let result = {
            let mut records = self.records.lock();
            let offset = records.len() as u64;

            match self.config.limit_reached(offset) {
                Some(max_records) => Err(LogError::LogFull { max_records }),
                None => {
                    record.offset = offset;
                    records.push(record);
                    Ok(offset)
                }
            }
        };

        match &result {
            Ok(offset) => trace!(offset, len, "appended record"),
            Err(e) => debug!(error = %e, "append rejected"),
        }
        result
    }

    /// Returns a copy of the record at `offset`.
    pub fn read(&self, offset: u64) -> Result<Record, LogError> {
        let records = self.records.lock();
        usize::try_from(offset)
            .ok()
            .and_then(|index| records.get(index))
            .cloned()
            .ok_or(LogError::OffsetNotFound(offset))
    }

    /// Number of records stored, which is also the next offset to be assigned.
    pub fn len(&self) -> u64 {
        self.records.lock().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}
