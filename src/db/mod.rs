pub mod migrations;
pub mod queries;

use anyhow::Context;
use rusqlite::Connection;

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    migrations::run_migrations(&conn)?;

    Ok(conn)
}
