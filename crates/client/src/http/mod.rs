//! HTTP transport for the v3 mail API.
//!
//! - `sender`: the sender struct, its constructors and request building
//! - `response`: turning API responses into [`crate::MessageSenderResult`]

pub mod response;
pub mod sender;

pub use sender::HttpV3MessageSender;
