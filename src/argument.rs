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
 * corecbor argument codec
 *
 * Every CBOR item starts with an initial byte (major type + additional info) optionally followed
 * by 1/2/4/8 big-endian bytes carrying the argument. This module is the single place that knows
 * the shortest-form encoding rule and the permissive decoding rule.
 **************************************************************************************************/
use crate::constants::*;
use crate::error::CBORError;
use crate::stream::Stream;

/// Write `major | ai(argument)` plus any follow-up bytes, choosing the shortest layout for
/// `argument`. `major` must already be shifted into the top 3 bits (one of the `MT_*` constants).
/// Returns the number of bytes written.
pub(crate) fn try_encode_argument(
    stream: &mut Stream,
    major: u8,
    argument: u64,
) -> Result<usize, CBORError> {
    let be = argument.to_be_bytes();
    if argument <= AI_PAYLOAD_MAX as u64 {
        stream.write_byte(major | argument as u8)?;
        Ok(1)
    } else if argument <= u8::MAX as u64 {
        stream.write_byte(major | AI_ONE_BYTE)?;
        stream.write_bytes(&be[7..8])?;
        Ok(2)
    } else if argument <= u16::MAX as u64 {
        stream.write_byte(major | AI_TWO_BYTES)?;
        stream.write_bytes(&be[6..8])?;
        Ok(3)
    } else if argument <= u32::MAX as u64 {
        stream.write_byte(major | AI_FOUR_BYTES)?;
        stream.write_bytes(&be[4..8])?;
        Ok(5)
    } else {
        stream.write_byte(major | AI_EIGHT_BYTES)?;
        stream.write_bytes(&be[0..8])?;
        Ok(9)
    }
}

/// Write the shortest encoding of `argument` under `major`, or return `0` on capacity failure.
pub fn encode_argument(stream: &mut Stream, major: u8, argument: u64) -> usize {
    let checkpoint = stream.checkpoint();
    match try_encode_argument(stream, major, argument) {
        Ok(n) => n,
        Err(_) => {
            stream.restore(checkpoint);
            0
        }
    }
}

/// The result of decoding an initial byte: its major type, and either the directly-embedded
/// argument or a marker that the item is indefinite-length/a break.
pub(crate) struct DecodedHeader {
    pub major: u8,
    pub additional: u8,
    pub argument: u64,
    pub len: usize,
}

/// Decode the initial byte at `offset` plus any follow-up argument bytes. Accepts both shortest
/// and non-shortest forms. For additional info 31 (indefinite/break), `argument` is 0 and the
/// caller must look at `additional`/`major` to decide what that means.
pub(crate) fn try_decode_header(stream: &Stream, offset: usize) -> Result<DecodedHeader, CBORError> {
    let initial = stream.byte_at(offset)?;
    let major = initial & MT_MASK;
    let additional = initial & AI_MASK;
    match additional {
        0..=AI_PAYLOAD_MAX => {
            Ok(DecodedHeader { major, additional, argument: additional as u64, len: 1 })
        }
        AI_ONE_BYTE => {
            let b = stream.slice_at(offset + 1, 1)?;
            Ok(DecodedHeader { major, additional, argument: b[0] as u64, len: 2 })
        }
        AI_TWO_BYTES => {
            let b = stream.slice_at(offset + 1, 2)?;
            Ok(DecodedHeader {
                major,
                additional,
                argument: u16::from_be_bytes([b[0], b[1]]) as u64,
                len: 3,
            })
        }
        AI_FOUR_BYTES => {
            let b = stream.slice_at(offset + 1, 4)?;
            Ok(DecodedHeader {
                major,
                additional,
                argument: u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as u64,
                len: 5,
            })
        }
        AI_EIGHT_BYTES => {
            let b = stream.slice_at(offset + 1, 8)?;
            let mut be = [0u8; 8];
            be.copy_from_slice(b);
            Ok(DecodedHeader { major, additional, argument: u64::from_be_bytes(be), len: 9 })
        }
        AI_INDEFINITE => Ok(DecodedHeader { major, additional, argument: 0, len: 1 }),
        _ => Err(CBORError::MalformedEncoding),
    }
}

/// Decode `major`'s argument at `offset`. Returns `(argument, bytes consumed)`, or `None` if the
/// initial byte's major type does not match, the encoding is indefinite/reserved, or the follow-up
/// bytes run past the end of the stream's encoded region.
pub fn decode_argument(stream: &Stream, offset: usize, major: u8) -> Option<(u64, usize)> {
    let header = try_decode_header(stream, offset).ok()?;
    if header.major != major || header.additional == AI_INDEFINITE {
        return None;
    }
    Some((header.argument, header.len))
}
