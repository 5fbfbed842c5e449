use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {name} has an invalid value '{value}'")]
    InvalidVar { name: &'static str, value: String },

    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
