use serde::{Deserialize, Serialize};

/// A single entry in the log.
///
/// `offset` is assigned by [`Log::append`](crate::Log::append); whatever the
/// caller puts there is overwritten.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub value: Vec<u8>,
    #[serde(default)]
    pub offset: u64,
}

impl Record {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Record {
            value: value.into(),
            offset: 0,
        }
    }
}
