use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaproomError {
    #[error("API request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl TaproomError {
    /// 是否属于目录拉取失败（传输错误或非 2xx 状态）
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, TaproomError>;
