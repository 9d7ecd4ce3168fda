//! Durable storage of asset records.
//!
//! The service layer only talks to [`AssetStore`]; [`SqliteAssetStore`] is the production
//! implementation.

mod schema;
mod sqlite;

pub use sqlite::SqliteAssetStore;

use crate::error::Result;
use common::model::asset::{Asset, AssetFields};

pub trait AssetStore: Send + Sync {
    /// Persists a new record and returns its store-assigned id.
    fn insert(&self, fields: &AssetFields) -> Result<i64>;

    /// Replaces every attribute of the record `id`. Missing ids are a silent no-op.
    fn update(&self, id: i64, fields: &AssetFields) -> Result<()>;

    /// Removes the record `id`. Missing ids are a silent no-op.
    fn delete(&self, id: i64) -> Result<()>;

    /// Every record, newest `created_at` first.
    fn list_all_ordered_by_created_desc(&self) -> Result<Vec<Asset>>;

    /// Every record where `needle` occurs, ignoring ASCII case, in any searchable field.
    ///
    /// Coarse pre-filter for fuzzy search; results keep the full-scan ordering.
    fn substring_prefilter(&self, needle: &str) -> Result<Vec<Asset>>;
}
