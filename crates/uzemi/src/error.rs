use thiserror::Error;

#[derive(Error, Debug)]
pub enum UzemiError {
    #[error("Data error: {0}")]
    Data(#[from] uzemi_data_processing::DataError),
    #[error("Sampling error: {0}")]
    Sample(#[from] crate::sample::SampleError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, UzemiError>;
