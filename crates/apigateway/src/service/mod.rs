mod auth;
mod customer;
mod dashboard;
mod invoice;
mod permission;
mod product;
mod upstream;
mod user;

pub use self::auth::AuthProxyService;
pub use self::customer::CustomerProxyService;
pub use self::dashboard::DashboardProxyService;
pub use self::invoice::InvoiceProxyService;
pub use self::permission::PermissionProxyService;
pub use self::product::ProductProxyService;
pub use self::upstream::UpstreamClient;
pub use self::user::UserProxyService;
