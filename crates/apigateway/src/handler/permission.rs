use crate::{
    abstract_trait::permission::DynPermissionProxy,
    domain::response::session::UpstreamToken,
    middleware::{
        jwt::auth_middleware,
        session::{SessionTtl, session_middleware},
    },
    state::AppState,
};
use axum::{Extension, middleware, response::IntoResponse, routing::get};
use shared::{domain::responses::ApiEnvelope, errors::{ErrorResponse, HttpError}};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/permissions",
    tag = "Permission",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Permissions granted to the current session", body = ApiEnvelope<Vec<String>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_permissions(
    Extension(service): Extension<DynPermissionProxy>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(service.find_all(&token).await?)
}

pub fn permission_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/permissions", get(get_permissions))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.permission_proxy.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(SessionTtl(app_state.session_ttl)))
}
