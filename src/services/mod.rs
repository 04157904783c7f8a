pub mod api_client;
pub mod auth_service;

pub use api_client::{ComplaintBackend, HttpBackend, UploadFile};
pub use auth_service::AuthService;
