use rusqlite::{params, Connection};

// ── Client Storage ──

pub fn get_value(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    let result = conn.query_row(
        "SELECT value FROM client_storage WHERE key = ?1",
        params![key],
        |row| row.get(0),
    );

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn set_value(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO client_storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET
           value = excluded.value,
           updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    #[test]
    fn test_missing_key_is_none() {
        let conn = setup_db();
        assert_eq!(get_value(&conn, "club_db").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let conn = setup_db();
        set_value(&conn, "club_db", "{}").unwrap();
        set_value(&conn, "club_db", r#"{"a":1}"#).unwrap();
        assert_eq!(
            get_value(&conn, "club_db").unwrap().as_deref(),
            Some(r#"{"a":1}"#)
        );
    }
}
