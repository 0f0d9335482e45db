//! Protobuf wire records for the dlkit locale primitives.
//!
//! The dlkit educational-metadata schemas describe localised text as a
//! `DisplayText` message that references an OSID `Type` identity for its
//! format, language and script. This crate provides both records as plain
//! Rust structs with hand-written [`prost::Message`] implementations, so no
//! schema compiler runs at build time: the field table lives directly in
//! each impl.
//!
//! Layout:
//! - [`types`] : the `Type` identity record (authority / namespace / identifier)
//! - [`locale`] : the `DisplayText` record
//!
//! Wire contract:
//! - The canonical encoder emits fields in ascending tag order and omits
//!   defaults: an empty string field and an unset nested message produce no
//!   bytes at all. Output is deterministic for a given record.
//! - Decoding accepts fields in any order and skips unknown tags by their
//!   wire type, so buffers written by newer schemas remain readable.
//! - Decoding is fallible and callers must handle [`DecodeError`]; encoding
//!   to an in-memory buffer cannot fail.

pub mod locale;
pub mod types;

mod wire;

// Re-export facades
pub use locale::DisplayText;
pub use types::Type;

/// Re-exported for convenience, so callers can encode and decode records
/// without naming `prost` directly.
pub use prost::Message;

/// Error surfaced when a buffer is malformed or truncated.
pub use prost::DecodeError;
