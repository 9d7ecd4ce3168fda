//! HTML pages. They are static files under `{static_dir}/templates`; the browser fills in
//! dynamic content from the JSON endpoints.

use crate::config::AppConfig;
use crate::session_controller::state::{is_authenticated, SessionsState};
use actix_files::NamedFile;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use log::error;

const ENTRY_PAGE: &str = "asset-entry-full.html";
const LOGIN_PAGE: &str = "login.html";

async fn serve_page(req: &HttpRequest, config: &AppConfig, name: &str) -> HttpResponse {
    let path = config.templates_dir().join(name);
    match NamedFile::open_async(&path).await {
        Ok(file) => file.into_response(req),
        Err(e) => {
            error!("Failed to open page {}: {}", path.display(), e);
            HttpResponse::InternalServerError().body("Page template unavailable")
        }
    }
}

/// `GET /`: the entry page for logged-in users, otherwise a redirect to the login page.
pub async fn index(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    sessions: web::Data<SessionsState>,
) -> HttpResponse {
    if !is_authenticated(&req, &sessions).await {
        return HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/login"))
            .finish();
    }
    serve_page(&req, &config, ENTRY_PAGE).await
}

/// `GET /asset-entry`.
pub async fn entry(req: HttpRequest, config: web::Data<AppConfig>) -> HttpResponse {
    serve_page(&req, &config, ENTRY_PAGE).await
}

/// `GET /login`.
pub async fn login(req: HttpRequest, config: web::Data<AppConfig>) -> HttpResponse {
    serve_page(&req, &config, LOGIN_PAGE).await
}
