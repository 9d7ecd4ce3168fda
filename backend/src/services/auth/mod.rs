//! # Login Service
//!
//! `GET /login` serves the login page; `POST /login` checks the submitted credentials with the
//! configured `CredentialVerifier` and, on success, issues a session cookie and redirects to
//! the entry page.

mod login;

use crate::services::pages;
use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/login";

/// Configures and returns the Actix scope for the login routes.
///
/// # Registered Routes:
///
/// *   **`GET /login`**:
///     - **Handler**: `pages::login`
///     - **Description**: Serves the login page.
///
/// *   **`POST /login`**:
///     - **Handler**: `login::process`
///     - **Description**: Checks `username` and `password`; on success sets the session cookie
///       and redirects to `/asset-entry`, otherwise answers `401`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(pages::login))
        .route("", post().to(login::process))
}
