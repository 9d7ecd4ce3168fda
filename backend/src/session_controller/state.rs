//! Tracks the login sessions issued by this process.
//!
//! The main components are:
//! - `SessionsState`: a clonable, thread-safe set of issued session tokens. It is created in
//!   `main.rs` and shared across the Actix application as `web::Data`.
//! - `is_authenticated`: checks the session cookie of an incoming request against that set.
//!
//! Sessions live for the lifetime of the process; restarting the server logs everybody out.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use std::{collections::HashSet, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "asset_session";

/// A thread-safe, shareable container for every active session token.
#[derive(Clone, Default)]
pub struct SessionsState {
    /// Tokens handed out by a successful login.
    ///
    /// Protected by an `Arc<RwLock>` so every request can check its cookie concurrently while
    /// logins take the write lock briefly to register a new token.
    pub sessions: Arc<RwLock<HashSet<String>>>,
}

impl SessionsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh random token and returns it.
    pub async fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(token.clone());
        token
    }

    pub async fn is_active(&self, token: &str) -> bool {
        self.sessions.read().await.contains(token)
    }
}

/// Builds the HttpOnly cookie that carries `token`.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Whether the request carries a cookie for a session issued by this process.
pub async fn is_authenticated(req: &HttpRequest, state: &SessionsState) -> bool {
    match req.cookie(SESSION_COOKIE) {
        Some(cookie) => state.is_active(cookie.value()).await,
        None => false,
    }
}
