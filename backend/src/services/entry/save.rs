//! Handles the entry form: parses the `action`, hands the fields to
//! `AssetService::create_or_update` and acknowledges the write.

use crate::error::{AssetError, Result};
use crate::service::AssetService;
use crate::services::run_blocking;
use actix_web::{web, HttpResponse, ResponseError};
use common::model::asset::AssetAction;
use common::requests::AssetEntryForm;
use common::responses::MutationAck;
use log::{error, info};

/// Actix web handler for the `POST /asset-entry` endpoint.
///
/// # Arguments
/// * `service` - The shared `AssetService`.
/// * `form` - The url-encoded entry form. `action` is `create`, `edit` or empty (create);
///   `id` is read only for `edit`.
///
/// # Returns
/// - `200 OK` with a `MutationAck` such as `{"message":"success","action":"create"}`.
/// - `400 Bad Request` for an unknown action, a missing required field, a malformed date or
///   an edit without a valid id.
/// - `500 Internal Server Error` if the write fails.
pub async fn process(
    service: web::Data<AssetService>,
    form: web::Form<AssetEntryForm>,
) -> HttpResponse {
    let form = form.into_inner();
    info!(
        "Asset entry received: action={:?}, serial_number={}",
        form.action, form.serial_number
    );

    match save_asset(service, form).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(e) => {
            error!("Asset entry failed: {}", e);
            e.error_response()
        }
    }
}

/// Resolves the action and id, then runs the write on the blocking pool.
async fn save_asset(
    service: web::Data<AssetService>,
    form: AssetEntryForm,
) -> Result<MutationAck> {
    let action = parse_action(&form.action)?;
    // An unparsable id is reported by the service, after field validation.
    let id = match action {
        AssetAction::Edit => form.id.trim().parse::<i64>().ok(),
        AssetAction::Create => None,
    };
    let fields = form.fields();

    let service = service.into_inner();
    run_blocking(move || service.create_or_update(action, fields, id)).await
}

fn parse_action(raw: &str) -> Result<AssetAction> {
    match raw.trim() {
        "" | "create" => Ok(AssetAction::Create),
        "edit" => Ok(AssetAction::Edit),
        other => Err(AssetError::validation(format!("unknown action '{}'", other))),
    }
}
