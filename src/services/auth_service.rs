use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::models::{LoginRequest, RegisterRequest, Session, User};
use crate::services::api_client::ComplaintBackend;
use crate::session::SessionStore;

/// Registration and login against the auth endpoints, persisting the session
/// blob that authorized complaint operations read back.
pub struct AuthService<B> {
    backend: B,
    sessions: SessionStore,
}

impl<B: ComplaintBackend> AuthService<B> {
    pub fn new(backend: B, sessions: SessionStore) -> Self {
        Self { backend, sessions }
    }

    pub async fn register(&self, request: RegisterRequest) -> ClientResult<()> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        self.backend.register(&request).await?;
        tracing::info!("registered user {}", request.email);

        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let session = self
            .backend
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        self.sessions.save(&session)?;
        tracing::info!("logged in as {}", session.user.id);

        Ok(session)
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.sessions.clear()
    }

    pub fn current_user(&self) -> ClientResult<Option<User>> {
        self.sessions.current_user()
    }
}
