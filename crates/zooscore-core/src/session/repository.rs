//! Durable snapshot storage trait.

use crate::error::Result;

/// Durable key-value storage for serialized session snapshots.
///
/// The contract is a plain string-to-string map: `get` returns the previously
/// stored value for a key, if any, and `set` unconditionally overwrites it.
/// There are no partial reads or writes. Implementations live in the
/// infrastructure crate.
pub trait SnapshotStorage: Send + Sync {
    /// Reads the stored value for `key`. Returns `None` if nothing has been
    /// stored under that key yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
