use thiserror::Error;

/// Reasons a [`crate::Message`] cannot be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Invalid 'from' information.")]
    InvalidFrom,

    #[error("Missing 'to' information.")]
    MissingTo,

    /// A to, cc or bcc recipient has an unusable address.
    #[error("Invalid recipient address: '{0}'")]
    InvalidRecipient(String),
}
