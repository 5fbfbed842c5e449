mod config;
mod message;

pub use {config::*, message::*};
