//! # Core Record Model
//!
//! Field types, values, record schemas and the generic codec engine.
//!
//! This module knows nothing about any particular radio protocol. Concrete
//! record shapes are declared on top of it in [`crate::types`].
//!
//! ## Components
//! - **Primitive**: field type set and little-endian integer widths
//! - **Enums**: single-valued enumerations and bit-flag sets
//! - **Array**: fixed-length arrays with no length prefix
//! - **Record**: ordered field schemas, record values and the builder
//! - **Codec**: schema-driven encode/decode and a stream adapter
//!
//! ## Wire Format
//! ```text
//! [field 0][field 1]...[field n-1]    no padding, no tags, no length prefixes
//! ```

pub mod array;
pub mod codec;
pub mod enums;
pub mod primitive;
pub mod record;
pub mod value;
