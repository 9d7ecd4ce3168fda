use crate::error::AssetError;
use crate::service::AssetService;
use crate::services::run_blocking;
use actix_web::{web, HttpResponse, ResponseError};
use common::requests::DeleteQuery;
use log::{error, info};

/// Actix web handler for the `DELETE /asset-entry?id={id}` endpoint.
///
/// # Arguments
/// * `service` - The shared `AssetService`.
/// * `query` - The `id` query parameter.
///
/// # Returns
/// - `200 OK` with `{"message":"success"}`, also when no record has that id.
/// - `400 Bad Request` if `id` is missing or not an integer.
/// - `500 Internal Server Error` if the delete fails.
pub async fn process(
    service: web::Data<AssetService>,
    query: web::Query<DeleteQuery>,
) -> HttpResponse {
    let id = match query.id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            info!("Rejected delete with invalid id {:?}", query.id);
            return AssetError::validation("invalid asset id").error_response();
        }
    };

    let service = service.into_inner();
    match run_blocking(move || service.delete(id)).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            error!("Asset delete failed: {}", e);
            e.error_response()
        }
    }
}
