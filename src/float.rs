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
 * corecbor IEEE 754 float serializers (major type 7, additional info 25/26/27)
 **************************************************************************************************/
use crate::constants::*;
use crate::error::CBORError;
use crate::half16::{f16_to_f64, f32_to_f16};
use crate::stream::Stream;

/// Serialize `v` as a half-precision float (`0xF9` + 2 bytes). Rounding, subnormal handling, and
/// NaN/infinity preservation follow `half16`; the wire value is carried as `half::f16` between
/// the conversion and the write, the same storage type the teacher's encoder used.
pub fn serialize_float16(stream: &mut Stream, v: f32) -> usize {
    let half = f32_to_f16(v);
    let checkpoint = stream.checkpoint();
    if stream.write_byte(SIMPLE_FLOAT16).is_ok()
        && stream.write_bytes(&half.to_bits().to_be_bytes()).is_ok()
    {
        3
    } else {
        stream.restore(checkpoint);
        0
    }
}

/// Serialize `v` as a single-precision float (`0xFA` + 4 bytes, big-endian).
pub fn serialize_float32(stream: &mut Stream, v: f32) -> usize {
    let checkpoint = stream.checkpoint();
    if stream.write_byte(SIMPLE_FLOAT32).is_ok() && stream.write_bytes(&v.to_be_bytes()).is_ok() {
        5
    } else {
        stream.restore(checkpoint);
        0
    }
}

/// Serialize `v` as a double-precision float (`0xFB` + 8 bytes, big-endian).
pub fn serialize_float64(stream: &mut Stream, v: f64) -> usize {
    let checkpoint = stream.checkpoint();
    if stream.write_byte(SIMPLE_FLOAT64).is_ok() && stream.write_bytes(&v.to_be_bytes()).is_ok() {
        9
    } else {
        stream.restore(checkpoint);
        0
    }
}

fn try_deserialize_float(
    stream: &Stream,
    offset: usize,
    marker: u8,
    payload_len: usize,
) -> Result<(f64, usize), CBORError> {
    let initial = stream.byte_at(offset)?;
    if initial != marker {
        return Err(CBORError::TypeMismatch);
    }
    let payload = stream.slice_at(offset + 1, payload_len)?;
    let v = match payload_len {
        2 => f16_to_f64(half::f16::from_bits(u16::from_be_bytes([payload[0], payload[1]]))),
        4 => {
            let mut be = [0u8; 4];
            be.copy_from_slice(payload);
            f32::from_be_bytes(be) as f64
        }
        8 => {
            let mut be = [0u8; 8];
            be.copy_from_slice(payload);
            f64::from_be_bytes(be)
        }
        _ => unreachable!(),
    };
    Ok((v, payload_len + 1))
}

/// Deserialize a half-precision float at `offset`, widened to `f64`. Returns `0` consumed if the
/// initial byte is not `0xF9` or the payload is truncated.
pub fn deserialize_float16(stream: &Stream, offset: usize, out: &mut f64) -> usize {
    match try_deserialize_float(stream, offset, SIMPLE_FLOAT16, 2) {
        Ok((v, n)) => {
            *out = v;
            n
        }
        Err(_) => 0,
    }
}

/// Deserialize a single-precision float at `offset`, widened to `f64`.
pub fn deserialize_float32(stream: &Stream, offset: usize, out: &mut f64) -> usize {
    match try_deserialize_float(stream, offset, SIMPLE_FLOAT32, 4) {
        Ok((v, n)) => {
            *out = v;
            n
        }
        Err(_) => 0,
    }
}

/// Deserialize a double-precision float at `offset`.
pub fn deserialize_float64(stream: &Stream, offset: usize, out: &mut f64) -> usize {
    match try_deserialize_float(stream, offset, SIMPLE_FLOAT64, 8) {
        Ok((v, n)) => {
            *out = v;
            n
        }
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float32_scenario_from_rfc_examples() {
        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        assert_eq!(serialize_float32(&mut s, 100000.0), 5);
        assert_eq!(s.as_slice(), &[0xFA, 0x47, 0xC3, 0x50, 0x00]);
    }

    #[test]
    fn float64_scenario_from_rfc_examples() {
        let mut buf = [0u8; 16];
        let mut s = Stream::new(&mut buf);
        assert_eq!(serialize_float64(&mut s, 1.1), 9);
        assert_eq!(s.as_slice(), &[0xFB, 0x3F, 0xF1, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9A]);
    }

    #[test]
    fn float16_scenario_from_rfc_examples() {
        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        assert_eq!(serialize_float16(&mut s, 1.5), 3);
        assert_eq!(s.as_slice(), &[0xF9, 0x3E, 0x00]);

        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        assert_eq!(serialize_float16(&mut s, f32::NEG_INFINITY), 3);
        assert_eq!(s.as_slice(), &[0xF9, 0xFC, 0x00]);
    }

    #[test]
    fn deserialize_wrong_width_returns_zero() {
        let mut buf = [0u8; 8];
        let mut s = Stream::new(&mut buf);
        serialize_float32(&mut s, 1.0);
        let mut out = 0.0;
        assert_eq!(deserialize_float64(&s, 0, &mut out), 0);
    }

    #[test]
    fn float_round_trip() {
        let mut buf = [0u8; 16];
        let mut s = Stream::new(&mut buf);
        serialize_float64(&mut s, 1.1);
        let mut out = 0.0;
        let n = deserialize_float64(&s, 0, &mut out);
        assert_eq!(n, 9);
        assert_eq!(out, 1.1);
    }
}
