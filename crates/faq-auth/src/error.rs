use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `faq auth login`")]
    NotAuthenticated,

    #[error("token expired — run `faq auth login` to refresh")]
    TokenExpired,

    #[error("JWKS validation failed: {0}")]
    JwksValidation(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
