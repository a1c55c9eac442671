use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory API error: {0}")]
    Api(String),

    #[error("failed to parse directory response: {0}")]
    Parse(String),

    #[error("directory request failed: {0}")]
    Http(#[from] reqwest::Error),
}
