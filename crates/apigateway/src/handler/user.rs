use crate::{
    abstract_trait::user::DynUserProxy,
    domain::{
        requests::user::{
            SetPreferenceRequest, UpdateNotificationSettingsRequest, UpdateProfileRequest,
        },
        response::{
            session::UpstreamToken,
            user::{NotificationSettingsResponse, ProfileResponse},
        },
    },
    middleware::{
        jwt::auth_middleware,
        session::{SessionTtl, session_middleware},
        validate::ValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, put},
};
use shared::{
    auth::AuthContext,
    cache::PreferenceStore,
    domain::responses::ApiEnvelope,
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "User",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the current user", body = ApiEnvelope<ProfileResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    Extension(service): Extension<DynUserProxy>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(service.get_profile(&token).await?)
}

#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = "User",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiEnvelope<ProfileResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    Extension(service): Extension<DynUserProxy>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    ValidatedJson(body): ValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(service.update_profile(&token, &body).await?)
}

#[utoipa::path(
    get,
    path = "/api/users/notification-settings",
    tag = "User",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Notification settings", body = ApiEnvelope<NotificationSettingsResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_notification_settings(
    Extension(service): Extension<DynUserProxy>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(service.get_notification_settings(&token).await?)
}

#[utoipa::path(
    put,
    path = "/api/users/notification-settings",
    tag = "User",
    security(("bearer_auth" = [])),
    request_body = UpdateNotificationSettingsRequest,
    responses(
        (status = 200, description = "Notification settings updated", body = ApiEnvelope<NotificationSettingsResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn update_notification_settings(
    Extension(service): Extension<DynUserProxy>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    ValidatedJson(body): ValidatedJson<UpdateNotificationSettingsRequest>,
) -> Result<impl IntoResponse, HttpError> {
    Ok(service.update_notification_settings(&token, &body).await?)
}

#[utoipa::path(
    get,
    path = "/api/users/preferences/{key}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("key" = String, Path, description = "Preference key")),
    responses(
        (status = 200, description = "Stored preference value, null when unset", body = ApiEnvelope<Option<String>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_preference(
    Extension(store): Extension<PreferenceStore>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let user_id = ctx.user().map(|u| u.id.clone());
    let value = store.get(&key, user_id.as_deref()).await;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(value, "Preference"))))
}

#[utoipa::path(
    put,
    path = "/api/users/preferences/{key}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("key" = String, Path, description = "Preference key")),
    request_body = SetPreferenceRequest,
    responses(
        (status = 200, description = "Preference saved", body = serde_json::Value),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn set_preference(
    Extension(store): Extension<PreferenceStore>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
    ValidatedJson(body): ValidatedJson<SetPreferenceRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let user_id = ctx.user().map(|u| u.id.clone());
    store.set(&key, user_id.as_deref(), &body.value).await;

    Ok((StatusCode::OK, Json(ApiEnvelope::message("Preference saved"))))
}

#[utoipa::path(
    delete,
    path = "/api/users/preferences/{key}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("key" = String, Path, description = "Preference key")),
    responses(
        (status = 200, description = "Preference removed", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn delete_preference(
    Extension(store): Extension<PreferenceStore>,
    Extension(ctx): Extension<AuthContext>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let user_id = ctx.user().map(|u| u.id.clone());
    store.remove(&key, user_id.as_deref()).await;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::message("Preference removed")),
    ))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users/profile", get(get_profile))
        .route("/api/users/profile", put(update_profile))
        .route(
            "/api/users/notification-settings",
            get(get_notification_settings),
        )
        .route(
            "/api/users/notification-settings",
            put(update_notification_settings),
        )
        .route("/api/users/preferences/{key}", get(get_preference))
        .route("/api/users/preferences/{key}", put(set_preference))
        .route("/api/users/preferences/{key}", delete(delete_preference))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_proxy.clone()))
        .layer(Extension(app_state.preferences.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(SessionTtl(app_state.session_ttl)))
}
