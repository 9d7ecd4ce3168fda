use rusqlite::Connection;

const CREATE_ASSETS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS assets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        serial_number TEXT,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        brand TEXT NOT NULL,
        application_date TEXT,
        specification TEXT,
        asset_code TEXT,
        order_date TEXT,
        created_at TEXT NOT NULL DEFAULT (date('now')),
        department TEXT,
        location TEXT,
        supplier TEXT,
        recipient TEXT,
        recipient_department TEXT,
        remarks TEXT
    )";

const CREATE_INDEXES: &str = "
    CREATE INDEX IF NOT EXISTS idx_assets_serial_number ON assets(serial_number);
    CREATE INDEX IF NOT EXISTS idx_assets_name ON assets(name);
    CREATE INDEX IF NOT EXISTS idx_assets_created_at ON assets(created_at);";

/// Creates the `assets` table and its lookup indexes when they are missing.
pub(super) fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_ASSETS_TABLE)?;
    conn.execute_batch(CREATE_INDEXES)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();

        let indexes: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'assets' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert_eq!(
            indexes,
            vec![
                "idx_assets_created_at",
                "idx_assets_name",
                "idx_assets_serial_number"
            ]
        );
    }
}
