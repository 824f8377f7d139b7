//! An in-memory, append-only record log.
//!
//! Records get contiguous offsets starting at 0 in the order they are
//! appended, and can be read back by offset from any number of threads.
//!
//! ```
//! use commitlog::{Log, LogError, Record};
//!
//! let log = Log::new();
//! assert_eq!(log.append(Record::new("a")).unwrap(), 0);
//! assert_eq!(log.append(Record::new("b")).unwrap(), 1);
//!
//! let record = log.read(1).unwrap();
//! assert_eq!(record.value, b"b");
//! assert_eq!(record.offset, 1);
//!
//! assert!(matches!(log.read(2), Err(LogError::OffsetNotFound(2))));
//! ```

mod log;
mod models;

pub use crate::log::config::{Config, ConfigBuilder};
pub use crate::log::log::{Log, LogError};
pub use crate::models::Record;
