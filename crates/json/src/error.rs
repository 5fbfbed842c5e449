use std::fmt::Display;
use thiserror::Error;

/// A member of the input could not be represented as a [`crate::Value`].
///
/// `path` is the logical location of the member, e.g. `<root>.to[2].email`,
/// and `kind` names what was found there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported type ({kind}) for member '{path}'")]
pub struct UnsupportedTypeError {
    pub path: String,
    pub kind: String,
}

impl UnsupportedTypeError {
    pub fn new(path: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: kind.into(),
        }
    }
}

/// Errors raised while lowering a `serde::Serialize` type into a value tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToValueError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedTypeError),

    /// Raised by a `Serialize` implementation through `serde::ser::Error::custom`.
    #[error("{0}")]
    Custom(String),
}

impl ToValueError {
    /// The unsupported-type details, when that is what went wrong.
    pub fn as_unsupported(&self) -> Option<&UnsupportedTypeError> {
        match self {
            ToValueError::Unsupported(err) => Some(err),
            ToValueError::Custom(_) => None,
        }
    }
}

impl serde::ser::Error for ToValueError {
    fn custom<T: Display>(msg: T) -> Self {
        ToValueError::Custom(msg.to_string())
    }
}
