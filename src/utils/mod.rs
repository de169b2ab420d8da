//! # Utility Modules
//!
//! Supporting utilities shared by the codec and its callers.
//!
//! ## Components
//! - **Logging**: tracing subscriber setup driven by [`crate::config::LoggingConfig`]
//! - **Colon hex**: text form of addresses and byte arrays

pub(crate) mod colon_hex;
pub mod logging;

pub use logging::init_logging;
