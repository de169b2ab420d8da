//! # EZSP Types
//!
//! Protocol-specific declarations built on [`crate::core`].
//!
//! ## Components
//! - **Named**: enumerations, flag sets and semantic aliases used by the records
//! - **Address**: EUI64, extended PAN ID and key material with their text forms
//! - **Channels**: channel mask helpers
//! - **Catalog**: the record types exchanged with the network co-processor

pub mod address;
pub mod catalog;
pub mod channels;
pub mod named;

pub use address::{parse_epan, Eui64, ExtendedPanId, KeyData};
pub use channels::{channel_mask, parse_channel_list};
