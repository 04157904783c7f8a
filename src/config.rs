use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub session_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("CITYVOICE_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api/v1".to_string()),
            session_path: env::var("CITYVOICE_SESSION_PATH")
                .unwrap_or_else(|_| ".cityvoice/session.json".to_string()),
        }
    }
}
