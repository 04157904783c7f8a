use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("not authenticated")]
    Unauthorized,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Submission(String),

    #[error("failed to upload file {filename}: {message}")]
    Upload { filename: String, message: String },

    #[error("session error: {0}")]
    Session(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
