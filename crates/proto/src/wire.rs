//! Shared decode loop for the hand-written message impls.

use prost::bytes::Buf;
use prost::encoding::{decode_key, DecodeContext, WireType};
use prost::{DecodeError, Message};

/// Reads `(tag, wire type)` keys from `buf` and feeds each field into `msg`
/// until the buffer is exhausted.
///
/// An end-group key terminates the message instead of erroring, so a record
/// embedded in a group sees the enclosing group's end marker as its own end
/// of input. Bytes after the end-group key are left unread.
pub(crate) fn merge_fields<M, B>(msg: &mut M, buf: &mut B) -> Result<(), DecodeError>
where
    M: Message,
    B: Buf,
{
    let ctx = DecodeContext::default();
    while buf.has_remaining() {
        let (tag, wire_type) = decode_key(buf)?;
        if wire_type == WireType::EndGroup {
            break;
        }
        msg.merge_field(tag, wire_type, buf, ctx.clone())?;
    }
    Ok(())
}
