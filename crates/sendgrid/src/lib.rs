//! # sendgrid
//!
//! Unified re-exports for the minimal SendGrid client.
//!
//! ```rust,ignore
//! use sendgrid::{HttpV3MessageSender, MessageBuilder, stringify, Value};
//! ```
//!
//! ## Re-exported Types
//!
//! ### Client Types (from `sendgrid-client`)
//! - [`HttpV3MessageSender`] - HTTP sender for the v3 mail endpoint
//! - [`MessageBuilder`] / [`Message`] - message construction
//! - [`MessageSenderResult`] - what the API answered
//!
//! ### JSON Types (from `sendgrid-json`)
//! - [`Value`] - order-preserving value tree
//! - [`stringify`] - minified or pretty JSON text

// =============================================================================
// Client Types (sendgrid-client)
// =============================================================================

/// HTTP sender for the v3 `mail/send` endpoint
#[cfg(not(target_arch = "wasm32"))]
pub use sendgrid_client::HttpV3MessageSender;

/// Sender configuration and its environment variable names
pub use sendgrid_client::config::{
    SenderConfig, DEFAULT_ENDPOINT, ENV_API_KEY, ENV_ENDPOINT, ENV_PRETTY_BODY, ENV_TIMEOUT_SECS,
};

/// Message model
pub use sendgrid_client::{Message, MessageBody, MessageBodyContentType, MessageEndPoint};

/// Fluent message construction
pub use sendgrid_client::MessageBuilder;

/// Send outcome and API error entries
pub use sendgrid_client::{ApiError, MessageSenderResult};

/// Error types
pub use sendgrid_client::{ConfigError, MessageError};

// =============================================================================
// JSON Types (sendgrid-json)
// =============================================================================

/// Value tree
pub use sendgrid_json::{Number, Object, Value};

/// Stringification
pub use sendgrid_json::{stringify, stringify_with, Precision, StringifyOptions};

/// Typed input lowering
pub use sendgrid_json::{to_json_string, to_value, ToValueError, UnsupportedTypeError};
