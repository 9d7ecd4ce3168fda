//! # Asset Listing
//!
//! Backend logic for `GET /assets/list`. The handler turns the raw query string into a
//! `PageRequest`, runs the list on the blocking pool and returns one `AssetPage` as JSON.
//! Whether the page comes from the cache or from a fuzzy search is decided by
//! `AssetService::list`.

use crate::search::pagination::PageRequest;
use crate::service::AssetService;
use crate::services::run_blocking;
use actix_web::{web, HttpResponse, ResponseError};
use common::requests::ListQuery;
use log::{error, info};

/// Actix web handler for the `GET /assets/list` endpoint.
///
/// # Arguments
/// * `service` - The shared `AssetService`.
/// * `query` - Optional `query`, `page` and `pageSize` parameters, all taken as raw strings.
///
/// # Returns
/// - `200 OK` with an `AssetPage` as JSON.
/// - `500 Internal Server Error` if the store cannot be read.
pub async fn process(
    service: web::Data<AssetService>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let ListQuery {
        query,
        page,
        page_size,
    } = query.into_inner();
    let request = PageRequest::from_raw(page.as_deref(), page_size.as_deref(), service.page_size());
    info!(
        "Listing assets: page {}, page size {}, query {:?}",
        request.page(),
        request.page_size(),
        query
    );

    let service = service.into_inner();
    match run_blocking(move || service.list(query.as_deref(), request)).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => {
            error!("Asset list failed: {}", e);
            e.error_response()
        }
    }
}
