use crate::{
    abstract_trait::session::DynSessionStore, domain::response::session::UpstreamToken,
    middleware::jwt::AuthUserId,
};
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Duration;
use shared::{
    auth::{AuthContext, RedirectGuard},
    errors::ErrorResponse,
};

/// Sliding session TTL, injected at router construction.
#[derive(Debug, Clone, Copy)]
pub struct SessionTtl(pub Duration);

pub fn session_key(user_id: &str) -> String {
    format!("session:{user_id}")
}

fn wants_html(req: &Request<Body>) -> bool {
    req.headers()
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Resolves the server-side session for the verified caller.
///
/// A live session slides its TTL and lands on the request as an explicit
/// [`AuthContext`] plus the upstream credential. A missing or expired one
/// settles the redirect guard: browsers are bounced to the landing route,
/// API clients get the uniform 401 envelope.
pub async fn session_middleware(
    Extension(session_store): Extension<DynSessionStore>,
    Extension(SessionTtl(ttl)): Extension<SessionTtl>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let Some(AuthUserId(user_id)) = req.extensions().get::<AuthUserId>().cloned() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Missing user id in request context")),
        ));
    };

    let key = session_key(&user_id);

    let session = match session_store.get_session(&key).await {
        Some(session) => session,
        None => {
            let mut guard = RedirectGuard::new();
            return match guard.observe(false, None) {
                Some(route) if wants_html(&req) => Ok(Redirect::to(route).into_response()),
                _ => Err((
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new("Session expired or not found")),
                )),
            };
        }
    };

    session_store.refresh_session(&key, ttl).await;

    req.extensions_mut()
        .insert(UpstreamToken(session.upstream_token.clone()));
    req.extensions_mut()
        .insert(AuthContext::authenticated(session.user));

    Ok(next.run(req).await)
}
