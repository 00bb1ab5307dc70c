use thiserror::Error;

/// CLI-level failures: configuration problems plus everything the API
/// crate can raise.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error(
        "missing {what}: pass the flag, set the environment variable, or add it to the config file"
    )]
    MissingCredential { what: &'static str },

    #[error(transparent)]
    Api(#[from] sumoly_api::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
