//! Display text with its format, language and script types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Type;
use crate::LocaleError;

/// Localised display text.
///
/// Unlike the wire record, a domain `DisplayText` always knows its three
/// types: construction fills in any the caller does not supply with the
/// dlkit defaults (English, Latin script, plain text). The text itself may
/// be empty, matching its implicit presence on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    text: String,
    format_type: Type,
    language_type: Type,
    script_type: Type,
}

impl DisplayText {
    /// Creates display text carrying the default format, language and
    /// script types.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format_type: Type::default_format(),
            language_type: Type::default_language(),
            script_type: Type::default_script(),
        }
    }

    /// Creates display text with explicit types.
    pub fn with_types(
        text: impl Into<String>,
        format_type: Type,
        language_type: Type,
        script_type: Type,
    ) -> Self {
        Self {
            text: text.into(),
            format_type,
            language_type,
            script_type,
        }
    }

    /// Returns the display string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text format type.
    pub fn format_type(&self) -> &Type {
        &self.format_type
    }

    /// Returns the language type.
    pub fn language_type(&self) -> &Type {
        &self.language_type
    }

    /// Returns the script type.
    pub fn script_type(&self) -> &Type {
        &self.script_type
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&DisplayText> for dlkit_proto::DisplayText {
    fn from(value: &DisplayText) -> Self {
        dlkit_proto::DisplayText {
            text: value.text.clone(),
            format_type_id: Some((&value.format_type).into()),
            language_type_id: Some((&value.language_type).into()),
            script_type_id: Some((&value.script_type).into()),
        }
    }
}

impl TryFrom<dlkit_proto::DisplayText> for DisplayText {
    type Error = LocaleError;

    /// Translates a wire record into a domain value.
    ///
    /// Type fields the record leaves unset fall back to the defaults; type
    /// fields that are present but invalid fail translation.
    fn try_from(record: dlkit_proto::DisplayText) -> Result<Self, Self::Error> {
        let format_type = match record.format_type_id {
            Some(t) => t.try_into()?,
            None => Type::default_format(),
        };
        let language_type = match record.language_type_id {
            Some(t) => t.try_into()?,
            None => Type::default_language(),
        };
        let script_type = match record.script_type_id {
            Some(t) => t.try_into()?,
            None => Type::default_script(),
        };

        Ok(Self {
            text: record.text,
            format_type,
            language_type,
            script_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlkit_proto::Message;

    #[test]
    fn new_applies_default_types() {
        let text = DisplayText::new("anonymous_user");

        assert_eq!(text.text(), "anonymous_user");
        assert_eq!(text.language_type(), &Type::default_language());
        assert_eq!(text.script_type(), &Type::default_script());
        assert_eq!(text.format_type(), &Type::default_format());
    }

    #[test]
    fn display_shows_the_text_only() {
        let text = DisplayText::new("Linear Algebra");
        assert_eq!(text.to_string(), "Linear Algebra");
    }

    #[test]
    fn wire_round_trip_preserves_everything() {
        let original = DisplayText::with_types(
            "Algèbre linéaire",
            Type::default_format(),
            Type::new("ISO", "639-2", "FRE").unwrap(),
            Type::default_script(),
        );

        let record: dlkit_proto::DisplayText = (&original).into();
        let bytes = record.encode_to_vec();
        let decoded = dlkit_proto::DisplayText::decode(bytes.as_slice()).expect("decode");
        let back = DisplayText::try_from(decoded).expect("translate");

        assert_eq!(original, back);
    }

    #[test]
    fn to_wire_marks_all_type_fields_present() {
        let record: dlkit_proto::DisplayText = (&DisplayText::new("hello")).into();

        assert!(record.format_type_id.is_some());
        assert!(record.language_type_id.is_some());
        assert!(record.script_type_id.is_some());
    }

    #[test]
    fn unset_wire_types_fall_back_to_defaults() {
        let record = dlkit_proto::DisplayText {
            text: "hello".to_string(),
            ..dlkit_proto::DisplayText::default()
        };

        let text = DisplayText::try_from(record).expect("translate");
        assert_eq!(text.text(), "hello");
        assert_eq!(text.language_type(), &Type::default_language());
        assert_eq!(text.script_type(), &Type::default_script());
        assert_eq!(text.format_type(), &Type::default_format());
    }

    #[test]
    fn invalid_wire_type_fails_translation() {
        let record = dlkit_proto::DisplayText {
            text: "hello".to_string(),
            language_type_id: Some(dlkit_proto::Type::default()),
            ..dlkit_proto::DisplayText::default()
        };

        let err = DisplayText::try_from(record).expect_err("should fail");
        assert!(matches!(err, LocaleError::Translation(_)));
    }

    #[test]
    fn empty_text_is_allowed() {
        let text = DisplayText::new("");
        let record: dlkit_proto::DisplayText = (&text).into();
        let back = DisplayText::try_from(record).expect("translate");

        assert_eq!(back.text(), "");
    }

    #[test]
    fn serde_round_trip() {
        let text = DisplayText::new("hello");
        let json = serde_json::to_string(&text).expect("serialize");
        let back: DisplayText = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(text, back);
    }
}
