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
 * corecbor IEEE 754 binary16 conversion
 *
 * CBOR's major type 7 / additional info 25 carries a half-precision float as its wire
 * representation (`half::f16` is used only as the in-memory storage type in `float.rs`; the
 * bit-level rounding here is done by hand so NaN-ness and sign are preserved exactly as this
 * crate's wire contract requires, independent of whichever rounding mode `half` itself applies).
 **************************************************************************************************/

use half::f16;

/// Convert `v` to the `half::f16` wire storage type the teacher's encoders use, via this crate's
/// own bit-exact rounding rather than `half`'s `From<f32>` impl.
pub fn f32_to_f16(v: f32) -> f16 {
    f16::from_bits(f32_bits_to_f16_bits(v.to_bits()))
}

/// Widen a `half::f16` wire value to `f64`.
pub fn f16_to_f64(v: f16) -> f64 {
    f16_bits_to_f64(v.to_bits())
}

/// Convert an `f32` bit pattern to its half-precision (binary16) bit pattern.
pub fn f32_bits_to_f16_bits(bits: u32) -> u16 {
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp = ((bits >> 23) & 0xFF) as i32;
    let mant = (bits >> 12) & 0x7FF; // 11 bits: 10 stored + 1 guard

    if exp == 255 {
        // Infinity or NaN: exponent saturated, preserve NaN-ness.
        let half_mant = if bits & 0x007F_FFFF != 0 { 0x0200u16 } else { 0 };
        return sign | 0x7C00 | half_mant;
    }
    if exp < 103 {
        // Magnitude too small even for a half denormal: signed zero.
        return sign;
    }
    if exp > 142 {
        // Overflows half range: signed infinity.
        return sign | 0x7C00;
    }
    if exp < 113 {
        // Denormal half result. Restore the implicit leading bit, then shift into place with
        // round-half-up on the bit that falls off the bottom.
        let m = mant | 0x0800;
        let shift = 114 - exp;
        let half_mant = ((m >> shift) + ((m >> (shift - 1)) & 1)) as u16;
        return sign | half_mant;
    }
    // Normal half result: round to nearest, ties resolved by the dropped guard bit.
    let half_exp = ((exp - 112) as u16) << 10;
    let half_mant = (mant >> 1) as u16;
    let round = (mant & 1) as u16;
    sign | half_exp | half_mant | round
}

/// Convert a half-precision (binary16) bit pattern to its `f64` value.
pub fn f16_bits_to_f64(bits: u16) -> f64 {
    let sign = if bits & 0x8000 != 0 { -1.0 } else { 1.0 };
    let exp = (bits >> 10) & 0x1F;
    let mant = (bits & 0x3FF) as f64;

    let magnitude = if exp == 0 {
        ldexp(mant, -24)
    } else if exp == 31 {
        if mant == 0.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    } else {
        ldexp(mant + 1024.0, exp as i32 - 25)
    };
    sign * magnitude
}

/// `libm::ldexp`-equivalent for values already known to be finite, non-extreme magnitudes —
/// half-precision exponents never approach `f64`'s range limits, so plain multiplication by a
/// power of two is exact and avoids pulling in `libm` for one call site.
fn ldexp(value: f64, exp: i32) -> f64 {
    value * 2f64.powi(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_common_values() {
        for v in [0.0f32, 1.0, -1.0, 1.5, -1.5, 100000.0f32.recip(), 65504.0] {
            let bits = f32_bits_to_f16_bits(v.to_bits());
            let back = f16_bits_to_f64(bits) as f32;
            assert!((back - v).abs() <= v.abs() * 1e-3 + 1e-6, "{v} -> {back}");
        }
    }

    #[test]
    fn preserves_infinity_and_sign() {
        assert_eq!(f32_bits_to_f16_bits(f32::INFINITY.to_bits()), 0x7C00);
        assert_eq!(f32_bits_to_f16_bits(f32::NEG_INFINITY.to_bits()), 0xFC00);
        assert!(f16_bits_to_f64(0x7C00).is_infinite());
        assert!(f16_bits_to_f64(0xFC00).is_sign_negative());
    }

    #[test]
    fn preserves_nan() {
        let bits = f32_bits_to_f16_bits(f32::NAN.to_bits());
        assert!(f16_bits_to_f64(bits).is_nan());
    }

    #[test]
    fn flushes_tiny_values_to_zero() {
        assert_eq!(f32_bits_to_f16_bits(1.0e-10f32.to_bits()) & 0x7FFF, 0);
    }

    #[test]
    fn decodes_one_point_five() {
        // 1.5 encodes as 0x3E00 per RFC 7049 appendix A.
        assert_eq!(f16_bits_to_f64(0x3E00), 1.5);
    }
}
