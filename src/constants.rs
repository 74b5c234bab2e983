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
 * corecbor wire constants
 **************************************************************************************************/

/// Additional Information bitmask.
pub const AI_MASK: u8 = 0b000_11111;
/// Major type bitmask.
pub const MT_MASK: u8 = 0b111_00000;

/// Major Type 0 (unsigned integers)
pub const MT_UINT: u8 = 0b000_00000;
/// Major Type 1 (negative integers)
pub const MT_NINT: u8 = 0b001_00000;
/// Major Type 2 (byte strings)
pub const MT_BSTR: u8 = 0b010_00000;
/// Major Type 3 (text strings)
pub const MT_TSTR: u8 = 0b011_00000;
/// Major Type 4 (arrays)
pub const MT_ARRAY: u8 = 0b100_00000;
/// Major Type 5 (maps)
pub const MT_MAP: u8 = 0b101_00000;
/// Major Type 6 (tags)
pub const MT_TAG: u8 = 0b110_00000;
/// Major Type 7 (floats and simple values)
pub const MT_SIMPLE: u8 = 0b111_00000;

/// Maximum value of an argument that fits directly in the additional info bits.
pub const AI_PAYLOAD_MAX: u8 = 23;
/// One follow-up byte of argument follows the initial byte.
pub const AI_ONE_BYTE: u8 = 24;
/// Two follow-up bytes of argument follow the initial byte.
pub const AI_TWO_BYTES: u8 = 25;
/// Four follow-up bytes of argument follow the initial byte.
pub const AI_FOUR_BYTES: u8 = 26;
/// Eight follow-up bytes of argument follow the initial byte.
pub const AI_EIGHT_BYTES: u8 = 27;
/// Indicates an indefinite-length container (major types 2-5) or the break stop code
/// (major type 7).
pub const AI_INDEFINITE: u8 = 31;

/// Simple values carried directly in the initial byte of major type 7.
pub const SIMPLE_FALSE: u8 = 0xF4;
pub const SIMPLE_TRUE: u8 = 0xF5;
pub const SIMPLE_NULL: u8 = 0xF6;
pub const SIMPLE_UNDEFINED: u8 = 0xF7;
pub const SIMPLE_FLOAT16: u8 = 0xF9;
pub const SIMPLE_FLOAT32: u8 = 0xFA;
pub const SIMPLE_FLOAT64: u8 = 0xFB;
pub const SIMPLE_BREAK: u8 = 0xFF;

/// First byte of the indefinite-length array header (`0x9F`).
pub const INDEFINITE_ARRAY: u8 = MT_ARRAY | AI_INDEFINITE;
/// First byte of the indefinite-length map header (`0xBF`).
pub const INDEFINITE_MAP: u8 = MT_MAP | AI_INDEFINITE;
