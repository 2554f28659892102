use crate::{
    abstract_trait::dashboard::DynDashboardProxy,
    domain::{
        requests::dashboard::{ReportQuery, StatsScope},
        response::{
            customer::ActivityResponse,
            dashboard::{DashboardStatsResponse, ReportDataResponse},
            session::UpstreamToken,
        },
    },
    handler::require_permission,
    middleware::{
        jwt::auth_middleware,
        session::{SessionTtl, session_middleware},
    },
    state::AppState,
};
use axum::{
    Extension, extract::Query, middleware, response::IntoResponse, routing::get,
};
use shared::{
    auth::{AuthContext, PermissionGate},
    domain::responses::ApiEnvelope,
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const DASHBOARD_READ: &str = "dashboard.read";
const REPORTS_READ: &str = "reports.read";

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard headline numbers", body = ApiEnvelope<DashboardStatsResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn get_dashboard_stats(
    Extension(service): Extension<DynDashboardProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, DASHBOARD_READ)?;

    // Viewers without report access get the summary variant instead of a
    // denial: the revenue figures just stay out of the payload.
    let gate = PermissionGate::new(&ctx);
    let scope = gate.select(REPORTS_READ, || StatsScope::Full, || StatsScope::Summary);

    Ok(service.stats(&token, scope).await?)
}

#[utoipa::path(
    get,
    path = "/api/dashboard/activities",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Recent activity across the account", body = ApiEnvelope<Vec<ActivityResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn get_dashboard_activities(
    Extension(service): Extension<DynDashboardProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, DASHBOARD_READ)?;

    Ok(service.activities(&token).await?)
}

#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Aggregated report rows", body = ApiEnvelope<Vec<ReportDataResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn get_report(
    Extension(service): Extension<DynDashboardProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, REPORTS_READ)?;

    Ok(service.report(&token, &query).await?)
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/dashboard/stats", get(get_dashboard_stats))
        .route("/api/dashboard/activities", get(get_dashboard_activities))
        .route("/api/reports", get(get_report))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.dashboard_proxy.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(SessionTtl(app_state.session_ttl)))
}
