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
 * corecbor array / map / break
 *
 * Headers only: callers are responsible for writing the nested items themselves, in order (for
 * maps: key then value, for `count` pairs).
 **************************************************************************************************/
use crate::argument::decode_argument;
use crate::constants::*;
use crate::error::CBORError;
use crate::stream::Stream;

/// Write a definite-length array header for `count` items. Returns bytes written or `0` on
/// capacity failure.
pub fn serialize_array(stream: &mut Stream, count: u64) -> usize {
    crate::argument::encode_argument(stream, MT_ARRAY, count)
}

/// Write a definite-length map header for `count` key/value pairs (not `2 * count` items).
/// Returns bytes written or `0` on capacity failure.
pub fn serialize_map(stream: &mut Stream, count: u64) -> usize {
    crate::argument::encode_argument(stream, MT_MAP, count)
}

/// Write an indefinite-length array header (`0x9F`). The caller writes items until it calls
/// `serialize_break`.
pub fn serialize_indefinite_array(stream: &mut Stream) -> usize {
    if stream.write_byte(INDEFINITE_ARRAY).is_ok() {
        1
    } else {
        0
    }
}

/// Write an indefinite-length map header (`0xBF`). The caller writes key/value pairs until it
/// calls `serialize_break`.
pub fn serialize_indefinite_map(stream: &mut Stream) -> usize {
    if stream.write_byte(INDEFINITE_MAP).is_ok() {
        1
    } else {
        0
    }
}

/// Write the break stop code (`0xFF`) closing an indefinite-length array or map.
pub fn serialize_break(stream: &mut Stream) -> usize {
    if stream.write_byte(SIMPLE_BREAK).is_ok() {
        1
    } else {
        0
    }
}

/// The shape of an array or map header read from the stream.
pub enum Length {
    /// A definite-length container of this many items (arrays) or pairs (maps).
    Definite(u64),
    /// An indefinite-length container; iterate until `at_break` is true.
    Indefinite,
}

fn try_deserialize_header(
    stream: &Stream,
    offset: usize,
    major: u8,
) -> Result<(Length, usize), CBORError> {
    let initial = stream.byte_at(offset)?;
    if initial & MT_MASK != major {
        return Err(CBORError::TypeMismatch);
    }
    if initial & AI_MASK == AI_INDEFINITE {
        return Ok((Length::Indefinite, 1));
    }
    let (count, n) = decode_argument(stream, offset, major).ok_or(CBORError::TypeMismatch)?;
    Ok((Length::Definite(count), n))
}

/// Deserialize an array header at `offset`. Returns `(length, bytes consumed)`, or `0` bytes
/// consumed if the item is not an array.
pub fn deserialize_array(stream: &Stream, offset: usize) -> (Length, usize) {
    try_deserialize_header(stream, offset, MT_ARRAY).unwrap_or((Length::Definite(0), 0))
}

/// Deserialize a map header at `offset`. Returns `(length, bytes consumed)` where `length` is the
/// number of key/value pairs, or `0` bytes consumed if the item is not a map.
pub fn deserialize_map(stream: &Stream, offset: usize) -> (Length, usize) {
    try_deserialize_header(stream, offset, MT_MAP).unwrap_or((Length::Definite(0), 0))
}

/// True if the byte at `offset` is the break stop code, or the stream has no more data there.
pub fn at_break(stream: &Stream, offset: usize) -> bool {
    stream.at_end(offset) || stream.byte_at(offset) == Ok(SIMPLE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::{deserialize_uint, serialize_uint};

    #[test]
    fn definite_array_header() {
        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        serialize_array(&mut s, 3);
        serialize_uint(&mut s, 1);
        serialize_uint(&mut s, 2);
        serialize_uint(&mut s, 3);
        assert_eq!(s.as_slice(), &[0x83, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn indefinite_array_round_trip() {
        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        serialize_indefinite_array(&mut s);
        serialize_uint(&mut s, 1);
        serialize_uint(&mut s, 2);
        serialize_break(&mut s);
        assert_eq!(s.as_slice(), &[0x9F, 0x01, 0x02, 0xFF]);

        let (len, header_len) = deserialize_array(&s, 0);
        assert!(matches!(len, Length::Indefinite));
        let mut offset = header_len;
        let mut items = 0u64;
        let mut sum = 0u64;
        while !at_break(&s, offset) {
            let mut v = 0u64;
            let n = deserialize_uint(&s, offset, &mut v);
            assert!(n > 0);
            sum += v;
            items += 1;
            offset += n;
        }
        assert_eq!(items, 2);
        assert_eq!(sum, 3);
    }

    #[test]
    fn definite_map_header() {
        let mut buf = [0u8; 16];
        let mut s = Stream::new(&mut buf);
        serialize_map(&mut s, 2);
        let (len, n) = deserialize_map(&s, 0);
        assert!(matches!(len, Length::Definite(2)));
        assert_eq!(n, 1);
    }
}
