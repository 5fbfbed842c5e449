//! # sendgrid-json
//!
//! A small JSON engine that turns an in-memory [`Value`] tree into text.
//!
//! Objects keep their insertion order, which callers rely on to produce
//! deterministic request bodies. Output is either minified or pretty printed
//! with four spaces per nesting level and a trailing newline.
//!
//! ```rust
//! use sendgrid_json::{stringify, Value};
//!
//! let mut root = Value::object();
//! root.insert("from", "a@x.com");
//! root.insert("tags", vec!["x", "y"]);
//!
//! assert_eq!(stringify(&root, true), r#"{"from":"a@x.com","tags":["x","y"]}"#);
//! ```
//!
//! Strings are written verbatim between quotes. No escaping is performed, so a
//! string containing `"` or control characters yields invalid JSON; keeping
//! string contents JSON-safe is the caller's responsibility.
//!
//! Arbitrary `serde::Serialize` types can be lowered into a [`Value`] with
//! [`to_value`], which reports anything outside the supported value set as an
//! [`UnsupportedTypeError`] carrying the member's logical path.

mod error;
mod number;
mod ser;
mod stringify;
mod value;

pub use {
    error::{ToValueError, UnsupportedTypeError},
    number::{format_number, Precision},
    ser::{to_json_string, to_value, ValueSerializer},
    stringify::{stringify, stringify_with, StringifyOptions, INDENTATION},
    value::{Number, Object, Value},
};

/// Logical path of the root value, as it appears in error messages.
pub const ROOT_PATH: &str = "<root>";
