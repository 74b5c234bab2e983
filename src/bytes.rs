/***************************************************************************************************
 * Copyright (c) 2020-2022 Qualcomm Innovation Center, Inc. All rights reserved.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of this software
 * and associated documentation files (the “Software”), to deal in the Software without
 * restriction, including without limitation the rights to use, copy, modify, merge, publish,
 * distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all copies or
 * substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING
 * BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
 * NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
 * DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
 **************************************************************************************************/
/***************************************************************************************************
 * corecbor byte string / text string serializers
 **************************************************************************************************/
use crate::argument::{decode_argument, try_encode_argument};
use crate::constants::{MT_BSTR, MT_TSTR};
use crate::error::CBORError;
use crate::stream::Stream;

fn try_serialize_str(stream: &mut Stream, major: u8, payload: &[u8]) -> Result<usize, CBORError> {
    let checkpoint = stream.checkpoint();
    let header_len = try_encode_argument(stream, major, payload.len() as u64)?;
    if let Err(e) = stream.write_bytes(payload) {
        stream.restore(checkpoint);
        return Err(e);
    }
    Ok(header_len + payload.len())
}

/// Serialize `payload` as a definite-length byte string (major type 2). Returns bytes written
/// or `0` on capacity failure.
pub fn serialize_bstr(stream: &mut Stream, payload: &[u8]) -> usize {
    try_serialize_str(stream, MT_BSTR, payload).unwrap_or(0)
}

/// Serialize `payload` as a definite-length text string (major type 3). The caller is
/// responsible for `payload` being valid UTF-8; this crate does not validate it on encode.
pub fn serialize_tstr(stream: &mut Stream, payload: &str) -> usize {
    try_serialize_str(stream, MT_TSTR, payload.as_bytes()).unwrap_or(0)
}

fn try_deserialize_str<'s>(
    stream: &'s Stream,
    offset: usize,
    major: u8,
) -> Result<(&'s [u8], usize), CBORError> {
    let (len, header_len) = decode_argument(stream, offset, major).ok_or(CBORError::TypeMismatch)?;
    let len = usize::try_from(len).map_err(|_| CBORError::Truncated)?;
    let payload = stream.slice_at(offset + header_len, len)?;
    Ok((payload, header_len + len))
}

/// Borrow the payload of a byte string at `offset` directly out of the stream's buffer, with no
/// copy. Returns `None` if the item is not a byte string or is truncated.
pub fn deserialize_bstr_ref<'s>(stream: &'s Stream, offset: usize) -> Option<(&'s [u8], usize)> {
    try_deserialize_str(stream, offset, MT_BSTR).ok()
}

/// Borrow the payload of a text string at `offset` directly out of the stream's buffer, with no
/// copy, validating it is UTF-8. Returns `None` if the item is not a text string, is truncated,
/// or is not valid UTF-8.
pub fn deserialize_tstr_ref<'s>(stream: &'s Stream, offset: usize) -> Option<(&'s str, usize)> {
    let (bytes, n) = try_deserialize_str(stream, offset, MT_TSTR).ok()?;
    core::str::from_utf8(bytes).ok().map(|s| (s, n))
}

fn deserialize_into(
    stream: &Stream,
    offset: usize,
    major: u8,
    out: &mut [u8],
) -> Result<usize, CBORError> {
    let (payload, total) = try_deserialize_str(stream, offset, major)?;
    if out.len() < payload.len() + 1 {
        return Err(CBORError::OutputTooSmall);
    }
    out[..payload.len()].copy_from_slice(payload);
    out[payload.len()] = 0;
    Ok(total)
}

/// Copy the payload of a byte string at `offset` into `out`, appending a terminating `0x00`.
/// Requires `out.len() >= payload_len + 1`. Returns bytes consumed from the stream, or `0` on
/// type mismatch, truncation, or an undersized `out`.
pub fn deserialize_bstr(stream: &Stream, offset: usize, out: &mut [u8]) -> usize {
    deserialize_into(stream, offset, MT_BSTR, out).unwrap_or(0)
}

/// Copy the payload of a text string at `offset` into `out`, appending a terminating `0x00`.
/// Requires `out.len() >= payload_len + 1`. Returns bytes consumed from the stream, or `0` on
/// type mismatch, truncation, or an undersized `out`.
pub fn deserialize_tstr(stream: &Stream, offset: usize, out: &mut [u8]) -> usize {
    deserialize_into(stream, offset, MT_TSTR, out).unwrap_or(0)
}
