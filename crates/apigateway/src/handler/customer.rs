use crate::{
    abstract_trait::customer::DynCustomerProxy,
    domain::{
        requests::customer::{FindAllCustomers, RestoreCustomersRequest},
        response::{
            customer::{ActivityResponse, CustomerResponse},
            session::UpstreamToken,
        },
    },
    handler::require_permission,
    middleware::{
        jwt::auth_middleware,
        session::{SessionTtl, session_middleware},
        validate::ValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension,
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{auth::AuthContext, domain::responses::ApiEnvelope, errors::{ErrorResponse, HttpError}};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const CUSTOMERS_READ: &str = "customers.read";
const CUSTOMERS_RESTORE: &str = "customers.restore";

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customer",
    security(("bearer_auth" = [])),
    params(FindAllCustomers),
    responses(
        (status = 200, description = "List of customers", body = ApiEnvelope<Vec<CustomerResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Query(params): Query<FindAllCustomers>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, CUSTOMERS_READ)?;

    Ok(service.find_all(&token, &params).await?)
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customer",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiEnvelope<CustomerResponse>),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, CUSTOMERS_READ)?;

    Ok(service.find_by_id(&token, &id).await?)
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/activities",
    tag = "Customer",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer activity feed", body = ApiEnvelope<Vec<ActivityResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn get_customer_activities(
    Extension(service): Extension<DynCustomerProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, CUSTOMERS_READ)?;

    Ok(service.activities(&token, &id).await?)
}

#[utoipa::path(
    post,
    path = "/api/customers/restore",
    tag = "Customer",
    security(("bearer_auth" = [])),
    request_body = RestoreCustomersRequest,
    responses(
        (status = 200, description = "Customers restored", body = ApiEnvelope<Vec<CustomerResponse>>),
        (status = 404, description = "Customers not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn restore_customers(
    Extension(service): Extension<DynCustomerProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    ValidatedJson(body): ValidatedJson<RestoreCustomersRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, CUSTOMERS_RESTORE)?;

    Ok(service.restore(&token, &body).await?)
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/customers", get(get_customers))
        .route("/api/customers/{id}", get(get_customer))
        .route(
            "/api/customers/{id}/activities",
            get(get_customer_activities),
        )
        .route("/api/customers/restore", post(restore_customers))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.customer_proxy.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(SessionTtl(app_state.session_ttl)))
}
