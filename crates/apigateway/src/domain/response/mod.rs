pub mod auth;
pub mod customer;
pub mod dashboard;
pub mod invoice;
pub mod product;
pub mod relay;
pub mod session;
pub mod user;
