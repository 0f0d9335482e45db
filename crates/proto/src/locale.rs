//! The `DisplayText` record.
//!
//! A `DisplayText` carries a human-readable string together with three
//! optional [`Type`] references describing how to interpret it: text format,
//! language and script.
//!
//! Presence semantics differ by field and are load-bearing for round-trip
//! equality:
//! - `text` uses implicit presence: the empty string is never emitted on the
//!   wire and cannot be distinguished from an unset field after decode.
//! - The three `Type` fields use explicit presence, tracked by `Option`.
//!   `Some(Type::default())` and `None` encode differently (an empty
//!   embedded message versus nothing at all) and survive a round trip
//!   as set and unset respectively.

use prost::bytes::{Buf, BufMut};
use prost::encoding::{self, DecodeContext, WireType};
use prost::{DecodeError, Message};
use serde::{Deserialize, Serialize};

use crate::types::Type;
use crate::wire;

/// Localised display text with format, language and script type references.
///
/// Construct an empty record with [`Default::default`]. Set a nested field
/// by assigning `Some(..)`, clear it by assigning `None`, and check presence
/// with [`Option::is_some`]; assigning `None` and clearing are the same
/// operation. Serialisation never mutates the record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    /// The display string (UTF-8). Field 1, implicit presence.
    pub text: String,
    /// Text format type, e.g. plain text. Field 2.
    pub format_type_id: Option<Type>,
    /// Language type, e.g. ISO 639-2 `ENG`. Field 3.
    pub language_type_id: Option<Type>,
    /// Script type, e.g. ISO 15924 `LATN`. Field 4.
    pub script_type_id: Option<Type>,
}

impl Message for DisplayText {
    fn encode_raw(&self, buf: &mut impl BufMut)
    where
        Self: Sized,
    {
        if !self.text.is_empty() {
            encoding::string::encode(1, &self.text, buf);
        }
        if let Some(msg) = &self.format_type_id {
            encoding::message::encode(2, msg, buf);
        }
        if let Some(msg) = &self.language_type_id {
            encoding::message::encode(3, msg, buf);
        }
        if let Some(msg) = &self.script_type_id {
            encoding::message::encode(4, msg, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => encoding::string::merge(wire_type, &mut self.text, buf, ctx),
            2 => encoding::message::merge(
                wire_type,
                self.format_type_id.get_or_insert_with(Type::default),
                buf,
                ctx,
            ),
            3 => encoding::message::merge(
                wire_type,
                self.language_type_id.get_or_insert_with(Type::default),
                buf,
                ctx,
            ),
            4 => encoding::message::merge(
                wire_type,
                self.script_type_id.get_or_insert_with(Type::default),
                buf,
                ctx,
            ),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.text.is_empty() {
            len += encoding::string::encoded_len(1, &self.text);
        }
        if let Some(msg) = &self.format_type_id {
            len += encoding::message::encoded_len(2, msg);
        }
        if let Some(msg) = &self.language_type_id {
            len += encoding::message::encoded_len(3, msg);
        }
        if let Some(msg) = &self.script_type_id {
            len += encoding::message::encoded_len(4, msg);
        }
        len
    }

    fn merge(&mut self, mut buf: impl Buf) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        wire::merge_fields(self, &mut buf)
    }

    fn clear(&mut self) {
        self.text.clear();
        self.format_type_id = None;
        self.language_type_id = None;
        self.script_type_id = None;
    }
}
