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
 * corecbor integer serializers
 **************************************************************************************************/
use crate::argument::{decode_argument, encode_argument, try_encode_argument};
use crate::constants::{MT_NINT, MT_UINT};
use crate::error::CBORError;
use crate::stream::Stream;

/// Serialize `v` as an unsigned integer (major type 0). Returns bytes written, or `0` on
/// capacity failure.
pub fn serialize_uint(stream: &mut Stream, v: u64) -> usize {
    encode_argument(stream, MT_UINT, v)
}

/// Serialize `v` as a signed integer: major type 0 if non-negative, major type 1 (encoded as
/// `-1 - v`) if negative. `i64::MIN` is representable exactly, computed via unsigned arithmetic
/// to avoid overflow on negation.
pub fn serialize_int(stream: &mut Stream, v: i64) -> usize {
    if v >= 0 {
        encode_argument(stream, MT_UINT, v as u64)
    } else {
        let argument = (-1i128 - v as i128) as u64;
        encode_argument(stream, MT_NINT, argument)
    }
}

/// Attempt to deserialize an unsigned integer at `offset`. Returns `(value, bytes consumed)`.
pub fn try_deserialize_uint(stream: &Stream, offset: usize) -> Result<(u64, usize), CBORError> {
    decode_argument(stream, offset, MT_UINT).ok_or(CBORError::TypeMismatch)
}

/// Deserialize an unsigned integer at `offset`, or return `0` if the item is not an unsigned
/// integer or is truncated. The decoded value is written to `*out`.
pub fn deserialize_uint(stream: &Stream, offset: usize, out: &mut u64) -> usize {
    match try_deserialize_uint(stream, offset) {
        Ok((v, n)) => {
            *out = v;
            n
        }
        Err(_) => 0,
    }
}

/// Attempt to deserialize a signed integer (major type 0 or 1) at `offset`.
pub fn try_deserialize_int(stream: &Stream, offset: usize) -> Result<(i64, usize), CBORError> {
    if let Some((argument, n)) = decode_argument(stream, offset, MT_UINT) {
        let v = i64::try_from(argument).map_err(|_| CBORError::TypeMismatch)?;
        return Ok((v, n));
    }
    if let Some((argument, n)) = decode_argument(stream, offset, MT_NINT) {
        let v = -1i128 - argument as i128;
        let v = i64::try_from(v).map_err(|_| CBORError::TypeMismatch)?;
        return Ok((v, n));
    }
    Err(CBORError::TypeMismatch)
}

/// Deserialize a signed integer at `offset`, or return `0` if the item is not an integer, does
/// not fit in `i64`, or is truncated.
pub fn deserialize_int(stream: &Stream, offset: usize, out: &mut i64) -> usize {
    match try_deserialize_int(stream, offset) {
        Ok((v, n)) => {
            *out = v;
            n
        }
        Err(_) => 0,
    }
}

pub(crate) fn try_serialize_uint(stream: &mut Stream, v: u64) -> Result<usize, CBORError> {
    try_encode_argument(stream, MT_UINT, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip_uint(v: u64, expect_len: usize) {
        let mut buf = [0u8; 16];
        let mut s = Stream::new(&mut buf);
        let n = serialize_uint(&mut s, v);
        assert_eq!(n, expect_len, "value {v}");
        let mut out = 0u64;
        let consumed = deserialize_uint(&s, 0, &mut out);
        assert_eq!(consumed, n);
        assert_eq!(out, v);
    }

    #[test]
    fn shortest_form_thresholds() {
        roundtrip_uint(0, 1);
        roundtrip_uint(23, 1);
        roundtrip_uint(24, 2);
        roundtrip_uint(255, 2);
        roundtrip_uint(256, 3);
        roundtrip_uint(1000, 3);
        roundtrip_uint(65535, 3);
        roundtrip_uint(65536, 5);
        roundtrip_uint(1_000_000, 5);
        roundtrip_uint(u32::MAX as u64, 5);
        roundtrip_uint(u32::MAX as u64 + 1, 9);
        roundtrip_uint(u64::MAX, 9);
    }

    #[test]
    fn negative_int_encoding() {
        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        assert_eq!(serialize_int(&mut s, -1), 1);
        assert_eq!(s.as_slice(), &[0x20]);

        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        assert_eq!(serialize_int(&mut s, -100), 2);
        assert_eq!(s.as_slice(), &[0x38, 0x63]);

        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        assert_eq!(serialize_int(&mut s, -1000), 3);
        assert_eq!(s.as_slice(), &[0x39, 0x03, 0xE7]);
    }

    #[test]
    fn i64_min_round_trips() {
        let mut buf = [0u8; 16];
        let mut s = Stream::new(&mut buf);
        let n = serialize_int(&mut s, i64::MIN);
        assert!(n > 0);
        let mut out = 0i64;
        let consumed = deserialize_int(&s, 0, &mut out);
        assert_eq!(consumed, n);
        assert_eq!(out, i64::MIN);
    }

    #[test]
    fn type_mismatch_returns_zero() {
        let mut buf = [0u8; 4];
        let mut s = Stream::new(&mut buf);
        // Empty byte string header, not an integer.
        s.write_bytes(&[0x40]).unwrap();
        let mut out = 0u64;
        assert_eq!(deserialize_uint(&s, 0, &mut out), 0);
    }
}
