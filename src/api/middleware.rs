//! Cookie-based session resolution.

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, Request,
    },
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use super::AppState;

/// The session a request belongs to, inserted into request extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

/// Resolve the request's session from its cookie, issuing a fresh id when
/// the cookie is absent or names a session the server does not hold.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let presented = session_id_from_headers(request.headers(), &state.config.cookie_name);
    let (id, created) = state.sessions.resolve(presented);

    request.extensions_mut().insert(SessionId(id));
    let mut response = next.run(request).await;

    if created {
        let cookie = session_cookie(&state.config.cookie_name, id, state.config.secure_cookie);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Invalid session cookie header: {}", e),
        }
    }

    response
}

/// Find the session id in the request's `Cookie` headers.
/// Values that are not UUIDs are ignored.
fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

fn session_cookie(cookie_name: &str, id: Uuid, secure: bool) -> String {
    let mut cookie = format!("{cookie_name}={id}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
