use std::sync::{Mutex, PoisonError};

use rusqlite::Connection;

use super::KeyValueStorage;
use crate::db::{self, queries};
use crate::errors::AppResult;

pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub fn open(path: &str) -> anyhow::Result<Self> {
        Ok(Self::new(db::init_db(path)?))
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(queries::get_value(&conn, key)?)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        queries::set_value(&conn, key, value)?;
        Ok(())
    }
}
