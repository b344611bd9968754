//! REST client for the NDA review backend: endpoint configuration, the `Api`
//! operation seam, and the reqwest implementation.

mod api;
mod config;
mod error;
mod http;

pub use api::Api;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::ApiClient;
