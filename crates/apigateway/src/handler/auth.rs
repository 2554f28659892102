use crate::{
    abstract_trait::{auth::DynAuthProxy, session::DynSessionStore},
    domain::{
        requests::auth::LoginRequest,
        response::{auth::TokenResponse, session::Session},
    },
    middleware::{
        jwt::auth_middleware,
        session::{SessionTtl, session_key, session_middleware},
        validate::ValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::DynJwtService,
    auth::{AuthContext, SessionUser},
    domain::responses::ApiEnvelope,
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiEnvelope<TokenResponse>),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login_handler(
    Extension(service): Extension<DynAuthProxy>,
    Extension(jwt): Extension<DynJwtService>,
    Extension(session_store): Extension<DynSessionStore>,
    Extension(SessionTtl(ttl)): Extension<SessionTtl>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let login = service.login(&body).await?;

    let access_token = jwt
        .generate_token(&login.user.id, "access")
        .map_err(|e| HttpError::Internal(format!("Failed to issue access token: {e}")))?;

    // The upstream credential lives in the server-side session only; the
    // client gets the gateway's own token.
    let session = Session {
        user: login.user.clone(),
        upstream_token: login.token,
    };

    if !session_store
        .create_session(&session_key(&login.user.id), &session, ttl)
        .await
    {
        return Err(HttpError::Internal("Failed to persist session".to_string()));
    }

    let reply = ApiEnvelope::ok(
        TokenResponse {
            token: access_token,
            user: login.user,
        },
        "Login successful",
    );

    Ok((StatusCode::OK, Json(reply)))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current session identity", body = ApiEnvelope<SessionUser>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn me_handler(
    Extension(ctx): Extension<AuthContext>,
) -> Result<impl IntoResponse, HttpError> {
    let user = ctx
        .user()
        .cloned()
        .ok_or_else(|| HttpError::Unauthorized("Session expired or not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(user, "Current session"))))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session terminated", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn logout_handler(
    Extension(session_store): Extension<DynSessionStore>,
    Extension(mut ctx): Extension<AuthContext>,
) -> Result<impl IntoResponse, HttpError> {
    if let Some(user) = ctx.user() {
        session_store.delete_session(&session_key(&user.id)).await;
    }
    ctx.clear();

    Ok((StatusCode::OK, Json(ApiEnvelope::message("Logged out"))))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/api/auth/me", get(me_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware));

    OpenApiRouter::new()
        .route("/api/auth/login", post(login_handler))
        .merge(protected)
        .layer(Extension(app_state.di_container.auth_proxy.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(SessionTtl(app_state.session_ttl)))
}
