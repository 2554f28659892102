use crate::{
    abstract_trait::invoice::DynInvoiceProxy,
    domain::{
        requests::invoice::FindAllInvoices,
        response::{
            invoice::{InvoiceResponse, PaymentResponse},
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
    Extension,
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{auth::AuthContext, domain::responses::ApiEnvelope, errors::{ErrorResponse, HttpError}};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const INVOICES_READ: &str = "invoices.read";

#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoice",
    security(("bearer_auth" = [])),
    params(FindAllInvoices),
    responses(
        (status = 200, description = "List of invoices", body = ApiEnvelope<Vec<InvoiceResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn get_invoices(
    Extension(service): Extension<DynInvoiceProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Query(params): Query<FindAllInvoices>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, INVOICES_READ)?;

    Ok(service.find_all(&token, &params).await?)
}

#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = "Invoice",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice details", body = ApiEnvelope<InvoiceResponse>),
        (status = 404, description = "Invoice not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_invoice(
    Extension(service): Extension<DynInvoiceProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, INVOICES_READ)?;

    Ok(service.find_by_id(&token, &id).await?)
}

#[utoipa::path(
    get,
    path = "/api/invoices/{id}/payments",
    tag = "Invoice",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Payments recorded against the invoice", body = ApiEnvelope<Vec<PaymentResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn get_invoice_payments(
    Extension(service): Extension<DynInvoiceProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, INVOICES_READ)?;

    Ok(service.payments(&token, &id).await?)
}

pub fn invoice_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/invoices", get(get_invoices))
        .route("/api/invoices/{id}", get(get_invoice))
        .route("/api/invoices/{id}/payments", get(get_invoice_payments))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.invoice_proxy.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(SessionTtl(app_state.session_ttl)))
}
