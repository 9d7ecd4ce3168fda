use crate::error::AssetError;
use crate::session_controller::credentials::CredentialVerifier;
use crate::session_controller::state::{session_cookie, SessionsState};
use actix_web::http::header;
use actix_web::{web, HttpResponse, ResponseError};
use common::requests::LoginForm;
use log::{info, warn};

/// Actix web handler for the `POST /login` endpoint.
///
/// # Arguments
/// * `form` - The url-encoded `username` and `password`.
/// * `verifier` - The configured `CredentialVerifier`.
/// * `sessions` - Where the new session token is registered.
///
/// # Returns
/// - `303 See Other` to `/asset-entry` with the session cookie set.
/// - `401 Unauthorized` for anything else.
pub async fn process(
    form: web::Form<LoginForm>,
    verifier: web::Data<dyn CredentialVerifier>,
    sessions: web::Data<SessionsState>,
) -> HttpResponse {
    if !verifier.verify(&form.username, &form.password) {
        warn!("Login failed for user {}", form.username);
        return AssetError::Unauthorized.error_response();
    }

    let token = sessions.issue().await;
    info!("User {} logged in", form.username);
    HttpResponse::SeeOther()
        .cookie(session_cookie(token))
        .insert_header((header::LOCATION, "/asset-entry"))
        .finish()
}
