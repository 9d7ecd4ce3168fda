//! # Asset List Service
//!
//! Serves `GET /assets/list`, the JSON feed behind the asset table. Without a `query` the page
//! is cut from the in-memory cache; with one, the store pre-filters by substring and the
//! candidates are fuzzy-matched before paging.

mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/assets";

/// Configures and returns the Actix scope for the asset list routes.
///
/// # Registered Routes:
///
/// *   **`GET /list?query=&page=&pageSize=`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns `{assets, total, page, pages, pageSize}`. Paging values that
///       are missing or not positive integers fall back to page 1 and the configured size.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/list", get().to(list::process))
}
