use crate::{
    abstract_trait::{
        auth::DynAuthProxy, customer::DynCustomerProxy, dashboard::DynDashboardProxy,
        invoice::DynInvoiceProxy, permission::DynPermissionProxy, product::DynProductProxy,
        user::DynUserProxy,
    },
    service::{
        AuthProxyService, CustomerProxyService, DashboardProxyService, InvoiceProxyService,
        PermissionProxyService, ProductProxyService, UpstreamClient, UserProxyService,
    },
};
use std::sync::Arc;

/// Per-resource proxy services, all riding the same upstream client.
#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_proxy: DynAuthProxy,
    pub customer_proxy: DynCustomerProxy,
    pub invoice_proxy: DynInvoiceProxy,
    pub product_proxy: DynProductProxy,
    pub user_proxy: DynUserProxy,
    pub permission_proxy: DynPermissionProxy,
    pub dashboard_proxy: DynDashboardProxy,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_proxy", &"DynAuthProxy")
            .field("customer_proxy", &"DynCustomerProxy")
            .field("invoice_proxy", &"DynInvoiceProxy")
            .field("product_proxy", &"DynProductProxy")
            .field("user_proxy", &"DynUserProxy")
            .field("permission_proxy", &"DynPermissionProxy")
            .field("dashboard_proxy", &"DynDashboardProxy")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self {
            auth_proxy: Arc::new(AuthProxyService::new(upstream.clone())),
            customer_proxy: Arc::new(CustomerProxyService::new(upstream.clone())),
            invoice_proxy: Arc::new(InvoiceProxyService::new(upstream.clone())),
            product_proxy: Arc::new(ProductProxyService::new(upstream.clone())),
            user_proxy: Arc::new(UserProxyService::new(upstream.clone())),
            permission_proxy: Arc::new(PermissionProxyService::new(upstream.clone())),
            dashboard_proxy: Arc::new(DashboardProxyService::new(upstream)),
        }
    }
}
