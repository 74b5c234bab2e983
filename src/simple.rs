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
 * corecbor bool / null / undefined (major type 7, single-byte simple values)
 **************************************************************************************************/
use crate::constants::*;
use crate::stream::Stream;

/// Serialize a bool as `0xF4` (false) or `0xF5` (true). Returns bytes written or `0` on capacity
/// failure.
pub fn serialize_bool(stream: &mut Stream, v: bool) -> usize {
    let byte = if v { SIMPLE_TRUE } else { SIMPLE_FALSE };
    if stream.write_byte(byte).is_ok() {
        1
    } else {
        0
    }
}

/// Write the `null` simple value (`0xF6`).
pub fn serialize_null(stream: &mut Stream) -> usize {
    if stream.write_byte(SIMPLE_NULL).is_ok() {
        1
    } else {
        0
    }
}

/// Write the `undefined` simple value (`0xF7`).
pub fn serialize_undefined(stream: &mut Stream) -> usize {
    if stream.write_byte(SIMPLE_UNDEFINED).is_ok() {
        1
    } else {
        0
    }
}

/// Deserialize a bool at `offset`. Per this wire contract, any major-7 byte other than
/// `SIMPLE_TRUE` deserializes as `false`; a non-major-7 byte is a type mismatch and returns `0`
/// consumed.
pub fn deserialize_bool(stream: &Stream, offset: usize, out: &mut bool) -> usize {
    match stream.byte_at(offset) {
        Ok(b) if b & MT_MASK == MT_SIMPLE => {
            *out = b == SIMPLE_TRUE;
            1
        }
        _ => 0,
    }
}

/// True if the byte at `offset` is the `null` simple value.
pub fn is_null(stream: &Stream, offset: usize) -> bool {
    stream.byte_at(offset) == Ok(SIMPLE_NULL)
}

/// True if the byte at `offset` is the `undefined` simple value.
pub fn is_undefined(stream: &Stream, offset: usize) -> bool {
    stream.byte_at(offset) == Ok(SIMPLE_UNDEFINED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_round_trip() {
        let mut buf = [0u8; 2];
        let mut s = Stream::new(&mut buf);
        assert_eq!(serialize_bool(&mut s, true), 1);
        assert_eq!(s.as_slice(), &[0xF5]);
        let mut out = false;
        assert_eq!(deserialize_bool(&s, 0, &mut out), 1);
        assert!(out);
    }

    #[test]
    fn null_and_undefined() {
        let mut buf = [0u8; 2];
        let mut s = Stream::new(&mut buf);
        serialize_null(&mut s);
        assert!(is_null(&s, 0));
        assert!(!is_undefined(&s, 0));
    }

    #[test]
    fn non_true_major_seven_decodes_false() {
        let mut buf = [0u8; 2];
        let mut s = Stream::new(&mut buf);
        serialize_null(&mut s);
        let mut out = true;
        assert_eq!(deserialize_bool(&s, 0, &mut out), 1);
        assert!(!out);
    }
}
