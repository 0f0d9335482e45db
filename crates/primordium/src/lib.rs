//! Locale and type primitives.
//!
//! The wire records in `dlkit-proto` are deliberately permissive: every
//! component is optional and unvalidated, exactly as the bytes allow. This
//! crate layers the domain rules on top:
//!
//! - [`types::Type`] : an OSID type identity that is guaranteed non-empty
//!   once constructed, with the canonical percent-escaped string form
//!   (for example `639-2%3AENG%40ISO`).
//! - [`locale::DisplayText`] : display text that always carries format,
//!   language and script types, falling back to the dlkit defaults
//!   (English, Latin script, plain text) where the wire record leaves
//!   them unset.
//!
//! Translation helpers convert between the two layers. Converting a domain
//! value to its wire record cannot fail; the reverse direction validates and
//! surfaces [`LocaleError::Translation`].

pub mod locale;
pub mod types;

// Re-export facades
pub use locale::DisplayText;
pub use types::Type;

/// Errors returned by the primitives layer.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// The input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A wire record could not be translated into a domain primitive.
    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`LocaleError`].
pub type LocaleResult<T> = Result<T, LocaleError>;
