pub mod config;
pub mod converter;
pub mod error;
pub mod helpers;
pub mod layout;
pub mod linux;
pub mod logger;
pub mod macos;
pub mod models;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{IconError, Result};
pub use models::*;
