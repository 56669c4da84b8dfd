pub mod sqlite;

use crate::errors::AppResult;

/// Local device storage: a flat map of string keys to string values.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}
