use {
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter},
    tracing::trace,
};

/// One entry of the v3 error envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} ({})", self.message, field),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ApiError>,
}

/// Outcome of a send call as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSenderResult {
    pub status: u16,
    /// value of the `X-Message-Id` response header
    pub message_id: Option<String>,
    pub errors: Vec<ApiError>,
}

impl MessageSenderResult {
    /// Builds a result from the raw parts of a response.
    ///
    /// A body that is empty or not an error envelope yields no errors; a
    /// failing status with an unreadable body keeps the body text as a single
    /// error message.
    pub fn from_parts(status: u16, message_id: Option<String>, body: &str) -> Self {
        let mut errors = if body.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str::<ErrorEnvelope>(body)
                .map(|envelope| envelope.errors)
                .unwrap_or_default()
        };

        if errors.is_empty() && !(200..300).contains(&status) && !body.trim().is_empty() {
            trace!("unrecognized error body: {}", body);
            errors.push(ApiError {
                message: body.trim().to_string(),
                field: None,
                help: None,
            });
        }

        Self {
            status,
            message_id,
            errors,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Display for MessageSenderResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_success() {
            write!(f, "success (status {})", self.status)?;
            if let Some(id) = &self.message_id {
                write!(f, ", message id {}", id)?;
            }
            return Ok(());
        }

        write!(f, "failure (status {})", self.status)?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}
