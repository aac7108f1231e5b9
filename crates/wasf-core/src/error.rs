use thiserror::Error;

#[derive(Debug, Error)]
pub enum WasfError {
    #[error("config error: {0}")]
    Config(String),

    #[error("intake error: {0}")]
    Intake(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
