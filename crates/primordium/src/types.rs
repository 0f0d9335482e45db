//! OSID type identities with the canonical string form.
//!
//! A type is identified by the triple `(authority, identifier_namespace,
//! identifier)`. The canonical rendering percent-escapes the separators:
//! `identifier_namespace%3Aidentifier%40authority`, for example
//! `639-2%3AENG%40ISO` for the English language type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{LocaleError, LocaleResult};

/// A validated OSID type identity.
///
/// Construction trims surrounding whitespace and rejects empty components,
/// so holders of a `Type` can rely on all three parts being present. This is
/// what distinguishes it from [`dlkit_proto::Type`], where any component may
/// be empty because the wire allows it.
///
/// # Construction
/// - [`Type::new`] validates caller-supplied components.
/// - [`Type::default_language`], [`Type::default_script`] and
///   [`Type::default_format`] build the well-known dlkit locale defaults.
/// - [`Type::from_str`] parses the canonical percent-escaped form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    authority: String,
    identifier_namespace: String,
    identifier: String,
}

impl Type {
    /// Creates a type identity from its three components.
    ///
    /// Each component is trimmed of leading and trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::InvalidInput`] if any trimmed component is
    /// empty.
    pub fn new(
        authority: impl AsRef<str>,
        identifier_namespace: impl AsRef<str>,
        identifier: impl AsRef<str>,
    ) -> LocaleResult<Self> {
        Ok(Self {
            authority: non_empty("authority", authority)?,
            identifier_namespace: non_empty("identifier_namespace", identifier_namespace)?,
            identifier: non_empty("identifier", identifier)?,
        })
    }

    /// The default language type: English, ISO 639-2.
    pub fn default_language() -> Self {
        Self {
            authority: "ISO".to_string(),
            identifier_namespace: "639-2".to_string(),
            identifier: "ENG".to_string(),
        }
    }

    /// The default script type: Latin, ISO 15924.
    pub fn default_script() -> Self {
        Self {
            authority: "ISO".to_string(),
            identifier_namespace: "15924".to_string(),
            identifier: "LATN".to_string(),
        }
    }

    /// The default text format type: plain text.
    pub fn default_format() -> Self {
        Self {
            authority: "okapia.net".to_string(),
            identifier_namespace: "TextFormats".to_string(),
            identifier: "PLAIN".to_string(),
        }
    }

    /// Returns the issuing authority.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Returns the namespace the identifier lives in.
    pub fn identifier_namespace(&self) -> &str {
        &self.identifier_namespace
    }

    /// Returns the identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

fn non_empty(component: &str, value: impl AsRef<str>) -> LocaleResult<String> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        return Err(LocaleError::InvalidInput(format!(
            "type {} cannot be empty",
            component
        )));
    }
    Ok(trimmed.to_owned())
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%3A{}%40{}",
            self.identifier_namespace, self.identifier, self.authority
        )
    }
}

impl FromStr for Type {
    type Err = LocaleError;

    /// Parses the canonical percent-escaped form.
    ///
    /// This does **not** normalise other renderings (unescaped `:`/`@`,
    /// different escape casing). Callers must provide the canonical
    /// representation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, rest) = s.split_once("%3A").ok_or_else(|| {
            LocaleError::InvalidInput(format!("missing %3A separator in type string: '{}'", s))
        })?;
        let (identifier, authority) = rest.split_once("%40").ok_or_else(|| {
            LocaleError::InvalidInput(format!("missing %40 separator in type string: '{}'", s))
        })?;
        Self::new(authority, namespace, identifier)
    }
}

impl From<&Type> for dlkit_proto::Type {
    fn from(value: &Type) -> Self {
        dlkit_proto::Type {
            authority: value.authority.clone(),
            identifier_namespace: value.identifier_namespace.clone(),
            identifier: value.identifier.clone(),
        }
    }
}

impl TryFrom<dlkit_proto::Type> for Type {
    type Error = LocaleError;

    /// Validates a wire record into a domain identity.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Translation`] if any identity component is
    /// empty on the wire.
    fn try_from(record: dlkit_proto::Type) -> Result<Self, Self::Error> {
        Self::new(
            &record.authority,
            &record.identifier_namespace,
            &record.identifier,
        )
        .map_err(|err| match err {
            LocaleError::InvalidInput(msg) => LocaleError::Translation(msg),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_whitespace() {
        let t = Type::new(" ISO ", "639-2", "ENG").unwrap();
        assert_eq!(t.authority(), "ISO");
        assert_eq!(t.identifier_namespace(), "639-2");
        assert_eq!(t.identifier(), "ENG");
    }

    #[test]
    fn new_rejects_empty_component() {
        let err = Type::new("ISO", "  ", "ENG").expect_err("should reject");
        match err {
            LocaleError::InvalidInput(msg) => assert!(msg.contains("identifier_namespace")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn display_renders_canonical_form() {
        assert_eq!(Type::default_language().to_string(), "639-2%3AENG%40ISO");
        assert_eq!(Type::default_script().to_string(), "15924%3ALATN%40ISO");
        assert_eq!(
            Type::default_format().to_string(),
            "TextFormats%3APLAIN%40okapia.net"
        );
    }

    #[test]
    fn parse_round_trips_canonical_form() {
        let original = Type::default_format();
        let parsed: Type = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn parse_rejects_missing_separators() {
        assert!("639-2%3AENG".parse::<Type>().is_err());
        assert!("639-2:ENG@ISO".parse::<Type>().is_err());
        assert!("".parse::<Type>().is_err());
    }

    #[test]
    fn wire_record_round_trip() {
        let original = Type::default_language();
        let record: dlkit_proto::Type = (&original).into();
        let back = Type::try_from(record).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn wire_record_with_empty_component_fails_translation() {
        let record = dlkit_proto::Type {
            authority: String::new(),
            identifier_namespace: "639-2".to_string(),
            identifier: "ENG".to_string(),
        };

        let err = Type::try_from(record).expect_err("should fail translation");
        assert!(matches!(err, LocaleError::Translation(_)));
    }
}
