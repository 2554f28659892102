use crate::{
    abstract_trait::product::DynProductProxy,
    domain::{
        requests::product::FindAllProducts,
        response::{product::ProductResponse, session::UpstreamToken},
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

const PRODUCTS_READ: &str = "products.read";

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(FindAllProducts),
    responses(
        (status = 200, description = "List of products", body = ApiEnvelope<Vec<ProductResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Missing permission", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, PRODUCTS_READ)?;

    Ok(service.find_all(&token, &params).await?)
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiEnvelope<ProductResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductProxy>,
    Extension(ctx): Extension<AuthContext>,
    Extension(UpstreamToken(token)): Extension<UpstreamToken>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    require_permission(&ctx, PRODUCTS_READ)?;

    Ok(service.find_by_id(&token, &id).await?)
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_proxy.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
        .layer(Extension(SessionTtl(app_state.session_ttl)))
}
