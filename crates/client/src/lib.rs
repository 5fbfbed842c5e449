//! # sendgrid-client
//!
//! Builds email messages and sends them through the SendGrid v3 `mail/send`
//! endpoint. Request bodies are produced by [`sendgrid_json`], so the order of
//! every key in the payload is fixed.
//!
//! ```rust,no_run
//! use sendgrid_client::{HttpV3MessageSender, MessageBuilder, MessageEndPoint};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let sender = HttpV3MessageSender::new("<YOUR_API_KEY_HERE>")?;
//!
//! let message = MessageBuilder::default()
//!     .set_from("you@domain.ext")
//!     .add_to("alice@another.domain.ext")
//!     .add_cc(MessageEndPoint::new("bob", "bob@domain.ext"))
//!     .set_subject("test subject")
//!     .set_body("test body")
//!     .build()?;
//!
//! let result = sender.send(&message).await?;
//! println!("{}", result);
//! # Ok(())
//! # }
//! ```

pub use {body::*, builder::*, config::*, endpoint::*, err::*, message::*, result::*};

#[cfg(not(target_arch = "wasm32"))]
pub use http::*;

mod body;
mod builder;
pub mod config;
mod endpoint;
pub mod err;
#[cfg(not(target_arch = "wasm32"))]
mod http;
mod message;
mod payload;
pub mod result;

pub use sendgrid_json as json;
