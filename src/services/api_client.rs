use reqwest::multipart;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{Complaint, ComplaintDraft, LoginRequest, RegisterRequest, Session};

/// A file selected for upload: raw bytes plus the metadata the upload endpoint
/// and the attachment classifier need.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Backend REST contract consumed by the store. Generic so tests can inject an
/// in-memory fake instead of a live server.
#[allow(async_fn_in_trait)]
pub trait ComplaintBackend {
    async fn list_complaints(&self) -> ClientResult<Vec<Complaint>>;
    async fn list_my_complaints(&self, token: &str) -> ClientResult<Vec<Complaint>>;
    async fn create_complaint(&self, token: &str, draft: &ComplaintDraft) -> ClientResult<()>;
    /// Uploads a single file and returns the backend-hosted URL. The URL is
    /// only valid once this call has returned Ok.
    async fn upload_file(&self, token: &str, file: &UploadFile) -> ClientResult<String>;
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()>;
    async fn login(&self, request: &LoginRequest) -> ClientResult<Session>;
}

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ComplaintsEnvelope {
    data: ComplaintsData,
}

#[derive(Debug, Deserialize)]
struct ComplaintsData {
    complaints: Vec<Complaint>,
}

#[derive(Debug, Deserialize)]
struct UploadEnvelope {
    data: UploadData,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    data: Session,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &Config) -> ClientResult<Self> {
        // GET /complaints is session-credentialed via cookie, so the client
        // keeps a cookie jar across calls.
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            base_url: config.api_base_url.clone(),
            client,
        })
    }

    fn server_message(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        parsed.message.or(parsed.error)
    }

    fn rejection(status: reqwest::StatusCode, body: &str) -> ClientError {
        ClientError::Rejected {
            status: status.as_u16(),
            message: Self::server_message(body)
                .unwrap_or_else(|| format!("request failed with status {}", status)),
        }
    }

    async fn fetch_complaints(&self, url: String, token: Option<&str>) -> ClientResult<Vec<Complaint>> {
        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("complaints API error: {} - {}", status, body);
            return Err(Self::rejection(status, &body));
        }

        let envelope: ComplaintsEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data.complaints)
    }
}

impl ComplaintBackend for HttpBackend {
    async fn list_complaints(&self) -> ClientResult<Vec<Complaint>> {
        self.fetch_complaints(format!("{}/complaints", self.base_url), None)
            .await
    }

    async fn list_my_complaints(&self, token: &str) -> ClientResult<Vec<Complaint>> {
        self.fetch_complaints(format!("{}/complaints/my", self.base_url), Some(token))
            .await
    }

    async fn create_complaint(&self, token: &str, draft: &ComplaintDraft) -> ClientResult<()> {
        let response = self
            .client
            .post(format!("{}/complaints", self.base_url))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("complaint submission rejected: {} - {}", status, body);
            return Err(ClientError::Submission(
                Self::server_message(&body)
                    .unwrap_or_else(|| "Failed to submit complaint".to_string()),
            ));
        }

        Ok(())
    }

    async fn upload_file(&self, token: &str, file: &UploadFile) -> ClientResult<String> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str(&file.content_type)
            .map_err(|e| ClientError::Upload {
                filename: file.filename.clone(),
                message: e.to_string(),
            })?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Upload {
                filename: file.filename.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::error!("upload API error: {} - {}", status, body);
            return Err(ClientError::Upload {
                filename: file.filename.clone(),
                message: Self::server_message(&body)
                    .unwrap_or_else(|| format!("upload failed with status {}", status)),
            });
        }

        let envelope: UploadEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data.url)
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let response = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("registration rejected: {} - {}", status, body);
            return Err(Self::rejection(status, &body));
        }

        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<Session> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("login rejected: {} - {}", status, body);
            return Err(Self::rejection(status, &body));
        }

        let envelope: SessionEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_extraction() {
        assert_eq!(
            HttpBackend::server_message(r#"{"message": "title is required"}"#),
            Some("title is required".to_string())
        );
        assert_eq!(
            HttpBackend::server_message(r#"{"error": "file too large"}"#),
            Some("file too large".to_string())
        );
        assert_eq!(HttpBackend::server_message("not json"), None);
        assert_eq!(HttpBackend::server_message("{}"), None);
    }
}
