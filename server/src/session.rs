//! Cookie-keyed session middleware.
//!
//! # Design
//! For every request the middleware reads the stored JSON for the caller's
//! session id, rehydrates it into a live `Session` once, and hands it to the
//! handlers through a request extension. When the handler is done, the live
//! session is collapsed back to plain JSON and written to the store. A
//! request whose cookie is missing, malformed, or names a session the store
//! does not hold (never issued or expired) starts a fresh session under a
//! newly minted id and gets the cookie set on the response.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use todo_core::Session;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error};
use uuid::Uuid;

use crate::{error::AppError, AppState};

/// Request-scoped handle to the live session.
#[derive(Debug, Clone)]
pub struct SessionHandle(Arc<Mutex<Session>>);

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self(Arc::new(Mutex::new(session)))
    }

    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.0.lock().await
    }
}

pub async fn load_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Already rehydrated by an outer application of this layer.
    if req.extensions().get::<SessionHandle>().is_some() {
        return Ok(next.run(req).await);
    }

    let cookie_name = &state.config.session_cookie;
    let max_age = state.config.session_max_age;

    // Only ids this server issued and still holds are honored; anything else
    // (no cookie, unknown or expired id) gets a freshly minted session.
    let existing = match session_id_from_headers(req.headers(), cookie_name) {
        Some(sid) => state.store.load(&sid, max_age).await.map(|value| (sid, value)),
        None => None,
    };
    let (sid, stored, is_new) = match existing {
        Some((sid, value)) => (sid, Some(value), false),
        None => (Uuid::new_v4(), None, true),
    };

    let session = Session::from_json(stored)?;
    debug!(%sid, lists = session.len(), is_new, "session loaded");

    let handle = SessionHandle::new(session);
    req.extensions_mut().insert(handle.clone());

    let mut response = next.run(req).await;

    let value = handle.lock().await.to_json()?;
    state.store.save(sid, value, max_age).await;

    if is_new {
        let cookie = format!(
            "{cookie_name}={sid}; Path=/; HttpOnly; Max-Age={}",
            max_age.as_secs()
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => error!(error = %e, cookie_name = %cookie_name, "invalid session cookie header"),
        }
    }
    Ok(response)
}

/// Find the session id in the `Cookie` headers, if present and well formed.
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}
