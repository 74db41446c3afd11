use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("unexpected payload: {0}")]
    Parse(String),

    #[error("invalid schedule: {0}")]
    Schedule(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
