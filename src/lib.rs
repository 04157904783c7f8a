pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod progress;
pub mod services;
pub mod session;
pub mod store;
pub mod utils;
pub mod views;

pub use analytics::{compute_analytics, Analytics};
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use services::{AuthService, ComplaintBackend, HttpBackend, UploadFile};
pub use session::SessionStore;
pub use store::ComplaintStore;
