//! HTTP endpoints. Each sub-module exposes a `configure_routes` that returns its Actix scope.

pub mod assets;
pub mod auth;
pub mod entry;
pub mod pages;

use crate::error::Result;
use actix_web::web;

/// Runs a store-bound closure on Actix's blocking thread pool.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await?
}
