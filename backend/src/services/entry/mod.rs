//! # Asset Entry Service
//!
//! Everything under `/asset-entry`: the entry page itself, and the form endpoints that create,
//! edit and delete records.
//!
//! ## Workflow
//!
//! 1.  **Validation**: required attributes and date formats are checked before any database
//!     access. A failure is a `400 Bad Request` with a readable message.
//!
//! 2.  **Write**: the insert, update or delete runs in its own transaction.
//!
//! 3.  **Cache rebuild**: once committed, the in-memory asset list is reloaded so the next
//!     unfiltered `GET /assets/list` sees the change.
//!
//! 4.  **Response**: a JSON acknowledgement such as `{"message":"success","action":"create"}`.

mod delete;
mod save;

use crate::services::pages;
use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/asset-entry";

/// Configures and returns the Actix scope for the entry routes.
///
/// # Registered Routes:
///
/// *   **`GET /asset-entry`**: the entry page.
/// *   **`POST /asset-entry`**: url-encoded entry form; `action=edit` with an `id` edits,
///     anything else creates.
/// *   **`DELETE /asset-entry?id={id}`**: deletes a record.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(pages::entry))
        .route("", post().to(save::process))
        .route("", delete().to(delete::process))
}
