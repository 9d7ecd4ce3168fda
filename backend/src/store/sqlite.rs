use super::schema::ensure_schema;
use super::AssetStore;
use crate::error::Result;
use common::model::asset::{Asset, AssetFields};
use log::debug;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, Row, Transaction};
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_COLUMNS: &str = "SELECT id, serial_number, name, category, brand, application_date, \
     specification, asset_code, order_date, created_at, department, location, supplier, \
     recipient, recipient_department, remarks FROM assets";

const ORDER_NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

const PREFILTER_WHERE: &str = "WHERE ulower(serial_number) LIKE ?1 ESCAPE '\\' \
     OR ulower(name) LIKE ?1 ESCAPE '\\' \
     OR ulower(category) LIKE ?1 ESCAPE '\\' \
     OR ulower(brand) LIKE ?1 ESCAPE '\\' \
     OR ulower(department) LIKE ?1 ESCAPE '\\' \
     OR ulower(location) LIKE ?1 ESCAPE '\\' \
     OR ulower(supplier) LIKE ?1 ESCAPE '\\' \
     OR ulower(recipient) LIKE ?1 ESCAPE '\\' \
     OR ulower(recipient_department) LIKE ?1 ESCAPE '\\' \
     OR ulower(remarks) LIKE ?1 ESCAPE '\\'";

/// SQLite-backed [`AssetStore`].
///
/// Each operation opens its own short-lived connection, so concurrent requests only contend
/// on SQLite's file locks.
#[derive(Debug, Clone)]
pub struct SqliteAssetStore {
    path: PathBuf,
}

impl SqliteAssetStore {
    /// Opens (creating if needed) the database at `path` and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self {
            path: path.to_path_buf(),
        };
        let conn = store.connect()?;
        ensure_schema(&conn)?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        register_unicode_lower(&conn)?;
        Ok(conn)
    }

    /// Runs `f` in a transaction. Returning early drops the transaction, which rolls it back.
    fn with_tx<T>(&self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    fn query_assets(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Asset>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let assets = stmt
            .query_map(params, asset_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(assets)
    }
}

impl AssetStore for SqliteAssetStore {
    fn insert(&self, fields: &AssetFields) -> Result<i64> {
        self.with_tx(|tx| {
            tx.execute(
                "INSERT INTO assets (serial_number, name, category, brand, application_date, \
                 specification, asset_code, order_date, created_at, department, location, \
                 supplier, recipient, recipient_department, remarks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
                params![
                    nullable(&fields.serial_number),
                    fields.name,
                    fields.category,
                    fields.brand,
                    nullable(&fields.application_date),
                    nullable(&fields.specification),
                    nullable(&fields.asset_code),
                    nullable(&fields.order_date),
                    fields.created_at,
                    nullable(&fields.department),
                    nullable(&fields.location),
                    nullable(&fields.supplier),
                    nullable(&fields.recipient),
                    nullable(&fields.recipient_department),
                    nullable(&fields.remarks),
                ],
            )?;
            let id = tx.last_insert_rowid();
            debug!("Inserted asset {}", id);
            Ok(id)
        })
    }

    fn update(&self, id: i64, fields: &AssetFields) -> Result<()> {
        self.with_tx(|tx| {
            let affected = tx.execute(
                "UPDATE assets SET serial_number = ?1, name = ?2, category = ?3, brand = ?4, \
                 application_date = ?5, specification = ?6, asset_code = ?7, order_date = ?8, \
                 created_at = ?9, department = ?10, location = ?11, supplier = ?12, \
                 recipient = ?13, recipient_department = ?14, remarks = ?15 WHERE id = ?16",
                params![
                    nullable(&fields.serial_number),
                    fields.name,
                    fields.category,
                    fields.brand,
                    nullable(&fields.application_date),
                    nullable(&fields.specification),
                    nullable(&fields.asset_code),
                    nullable(&fields.order_date),
                    fields.created_at,
                    nullable(&fields.department),
                    nullable(&fields.location),
                    nullable(&fields.supplier),
                    nullable(&fields.recipient),
                    nullable(&fields.recipient_department),
                    nullable(&fields.remarks),
                    id,
                ],
            )?;
            debug!("Updated asset {} ({} row(s))", id, affected);
            Ok(())
        })
    }

    fn delete(&self, id: i64) -> Result<()> {
        self.with_tx(|tx| {
            let affected = tx.execute("DELETE FROM assets WHERE id = ?1", params![id])?;
            debug!("Deleted asset {} ({} row(s))", id, affected);
            Ok(())
        })
    }

    fn list_all_ordered_by_created_desc(&self) -> Result<Vec<Asset>> {
        self.query_assets(&format!("{} {}", SELECT_COLUMNS, ORDER_NEWEST_FIRST), [])
    }

    fn substring_prefilter(&self, needle: &str) -> Result<Vec<Asset>> {
        let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
        self.query_assets(
            &format!("{} {} {}", SELECT_COLUMNS, PREFILTER_WHERE, ORDER_NEWEST_FIRST),
            params![pattern],
        )
    }
}

/// Registers `ulower(text)`, a Unicode-aware `lower()`. SQLite's own `lower()` and `LIKE`
/// only fold ASCII letters.
fn register_unicode_lower(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "ulower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|v| v.to_lowercase()))
        },
    )
}

/// Empty optional attributes are stored as NULL.
fn nullable(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Escapes LIKE wildcards so the needle only matches itself.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn asset_from_row(row: &Row<'_>) -> rusqlite::Result<Asset> {
    Ok(Asset {
        id: row.get(0)?,
        fields: AssetFields {
            serial_number: text(row, 1)?,
            name: text(row, 2)?,
            category: text(row, 3)?,
            brand: text(row, 4)?,
            application_date: text(row, 5)?,
            specification: text(row, 6)?,
            asset_code: text(row, 7)?,
            order_date: text(row, 8)?,
            created_at: text(row, 9)?,
            department: text(row, 10)?,
            location: text(row, 11)?,
            supplier: text(row, 12)?,
            recipient: text(row, 13)?,
            recipient_department: text(row, 14)?,
            remarks: text(row, 15)?,
        },
    })
}
