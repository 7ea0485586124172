use crate::{stmt::Value, Result};
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Produces values for a column on the client side.
pub trait ValueGenerator: Send + Sync {
    /// Returns the next value.
    fn next(&self) -> Result<Value>;

    /// Whether generated values are placeholders the store replaces on
    /// insert.
    fn generates_temporary_values(&self) -> bool {
        false
    }
}

/// Generates GUIDs that sort in creation order when stored as SQL Server
/// `uniqueidentifier` values.
///
/// The first eight bytes are random. The last eight hold a counter seeded
/// from the current UTC time and incremented on every call, shuffled into
/// the byte positions SQL Server compares first.
#[derive(Debug)]
pub struct SequentialGuidValueGenerator {
    counter: AtomicI64,
}

impl SequentialGuidValueGenerator {
    pub fn new() -> SequentialGuidValueGenerator {
        let now = Utc::now().naive_utc();

        // The system clock is always inside the tick range.
        let seed = crate::stmt::to_ticks(&now).unwrap_or_default();

        SequentialGuidValueGenerator {
            counter: AtomicI64::new(seed),
        }
    }

    pub(crate) fn boxed() -> Box<dyn ValueGenerator> {
        Box::new(SequentialGuidValueGenerator::new())
    }
}

impl Default for SequentialGuidValueGenerator {
    fn default() -> Self {
        SequentialGuidValueGenerator::new()
    }
}

impl ValueGenerator for SequentialGuidValueGenerator {
    fn next(&self) -> Result<Value> {
        let mut bytes = Uuid::new_v4().to_bytes_le();
        let counter = (self.counter.fetch_add(1, Ordering::Relaxed) + 1).to_le_bytes();

        bytes[8] = counter[1];
        bytes[9] = counter[0];
        bytes[10] = counter[7];
        bytes[11] = counter[6];
        bytes[12] = counter[5];
        bytes[13] = counter[4];
        bytes[14] = counter[3];
        bytes[15] = counter[2];

        Ok(Value::Uuid(Uuid::from_bytes_le(bytes)))
    }
}
