mod auth;
mod error;
mod gateway;
mod http;

pub use self::auth::AuthError;
pub use self::error::ErrorResponse;
pub use self::gateway::{GatewayError, INTERNAL_ERROR_MESSAGE, normalize_error};
pub use self::http::HttpError;
