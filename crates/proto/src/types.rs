//! The `Type` identity record.
//!
//! dlkit identifies every locale concept (language, script, text format) by
//! an OSID type: an authority / namespace / identifier string triple. On the
//! wire a `Type` is an ordinary embedded message; all three components use
//! implicit presence, so an empty component is simply not transmitted.

use prost::bytes::{Buf, BufMut};
use prost::encoding::{self, DecodeContext, WireType};
use prost::{DecodeError, Message};
use serde::{Deserialize, Serialize};

use crate::wire;

/// OSID type identity triple.
///
/// Every component defaults to the empty string, and the encoder omits empty
/// components entirely, so a fully default `Type` encodes to zero bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    /// Issuing authority, e.g. `ISO` or `okapia.net`. Field 1.
    pub authority: String,
    /// Namespace the identifier lives in, e.g. `639-2`. Field 2.
    pub identifier_namespace: String,
    /// The identifier itself, e.g. `ENG`. Field 3.
    pub identifier: String,
}

impl Message for Type {
    fn encode_raw(&self, buf: &mut impl BufMut)
    where
        Self: Sized,
    {
        if !self.authority.is_empty() {
            encoding::string::encode(1, &self.authority, buf);
        }
        if !self.identifier_namespace.is_empty() {
            encoding::string::encode(2, &self.identifier_namespace, buf);
        }
        if !self.identifier.is_empty() {
            encoding::string::encode(3, &self.identifier, buf);
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
            1 => encoding::string::merge(wire_type, &mut self.authority, buf, ctx),
            2 => encoding::string::merge(wire_type, &mut self.identifier_namespace, buf, ctx),
            3 => encoding::string::merge(wire_type, &mut self.identifier, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.authority.is_empty() {
            len += encoding::string::encoded_len(1, &self.authority);
        }
        if !self.identifier_namespace.is_empty() {
            len += encoding::string::encoded_len(2, &self.identifier_namespace);
        }
        if !self.identifier.is_empty() {
            len += encoding::string::encoded_len(3, &self.identifier);
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
        self.authority.clear();
        self.identifier_namespace.clear();
        self.identifier.clear();
    }
}
