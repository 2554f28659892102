mod auth;
mod customer;
mod dashboard;
mod invoice;
mod permission;
mod product;
mod user;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    auth::{AuthContext, has_permission},
    domain::responses::ApiEnvelope,
    errors::HttpError,
    utils::shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::customer::customer_routes;
pub use self::dashboard::dashboard_routes;
pub use self::invoice::invoice_routes;
pub use self::permission::permission_routes;
pub use self::product::product_routes;
pub use self::user::user_routes;

/// Server-side twin of the client's permission gating: deny with 403 before
/// any upstream call is made.
pub(crate) fn require_permission(ctx: &AuthContext, permission: &str) -> Result<(), HttpError> {
    if has_permission(ctx.user(), permission) {
        Ok(())
    } else {
        Err(HttpError::Forbidden(format!(
            "Access denied. Required permission: {permission}"
        )))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_handler,
        auth::me_handler,
        auth::logout_handler,

        customer::get_customers,
        customer::get_customer,
        customer::get_customer_activities,
        customer::restore_customers,

        invoice::get_invoices,
        invoice::get_invoice,
        invoice::get_invoice_payments,

        product::get_products,
        product::get_product,

        user::get_profile,
        user::update_profile,
        user::get_notification_settings,
        user::update_notification_settings,
        user::get_preference,
        user::set_preference,
        user::delete_preference,

        permission::get_permissions,

        dashboard::get_dashboard_stats,
        dashboard::get_dashboard_activities,
        dashboard::get_report,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Customer", description = "Customer endpoints"),
        (name = "Invoice", description = "Invoice endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "User", description = "Profile and preference endpoints"),
        (name = "Permission", description = "Permission endpoints"),
        (name = "Dashboard", description = "Dashboard and reporting endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiEnvelope::message("API gateway is healthy")),
    )
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();
    let registry = state.registry.lock().await;

    match encode(&mut buffer, &registry) {
        Ok(()) => (
            [(
                CONTENT_TYPE,
                "application/openmetrics-text; version=1.0.0; charset=utf-8",
            )],
            buffer,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response(),
    }
}

pub struct AppRouter;

impl AppRouter {
    /// Assemble the full application router. Split from `serve` so tests can
    /// bind it to an ephemeral port.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/api/health", get(health_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(invoice_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(permission_routes(shared_state.clone()))
            .merge(dashboard_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("Gateway listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
