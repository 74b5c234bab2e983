/***************************************************************************************************
 * Copyright (c) 2021, 2022 Qualcomm Innovation Center, Inc. All rights reserved.
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
/// # pretty - recursive CBOR diagnostic-style dump
///
/// Walks an encoded stream purely by offset, printing one line per item with two-space
/// indentation per nesting level. Intended for debugging and logging, not as a machine-readable
/// format.
use std::io::Write;
use std::string::String;

use crate::constants::*;
use crate::stream::Stream;

/// Bounds on the printer's recursion depth and scratch-buffer size, configurable because a
/// pathologically nested or long-stringed input should not be left to grow the call stack or a
/// hidden constant unbounded.
pub struct Limits {
    /// Maximum array/map/tag nesting depth `decode_at` will recurse into.
    pub max_depth: u32,
    /// Maximum number of byte/text string payload bytes printed before truncating with `...`.
    pub scratch_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { max_depth: 32, scratch_len: 1024 }
    }
}

/// A recursive pretty-printer over a [`Stream`]'s encoded region.
pub struct Printer {
    limits: Limits,
}

impl Printer {
    pub fn new() -> Self {
        Printer { limits: Limits::default() }
    }

    pub fn with_limits(limits: Limits) -> Self {
        Printer { limits }
    }

    /// Print every item in `stream` from offset 0 to `stream.position()`. Stops and prints a
    /// diagnostic if an item fails to decode.
    pub fn decode(&self, stream: &Stream, out: &mut dyn Write) -> std::io::Result<()> {
        let mut offset = 0;
        while !stream.at_end(offset) {
            match self.decode_at(stream, offset, 0, out) {
                Ok(n) if n > 0 => offset += n,
                _ => {
                    let byte = stream.byte_at(offset).unwrap_or(0);
                    writeln!(
                        out,
                        "{}<malformed item at offset {}, byte {}>",
                        indent(0),
                        offset,
                        print_hex(byte)
                    )?;
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Print the single item at `offset`, recursing into arrays/maps/tags. Returns bytes
    /// consumed, or `0` if the byte at `offset` could not be decoded as any known item.
    pub fn decode_at(
        &self,
        stream: &Stream,
        offset: usize,
        idt: u32,
        out: &mut dyn Write,
    ) -> std::io::Result<usize> {
        let initial = match stream.byte_at(offset) {
            Ok(b) => b,
            Err(_) => return Ok(0),
        };
        let major = initial & MT_MASK;
        match major {
            MT_UINT => {
                let mut v = 0u64;
                let n = crate::integer::deserialize_uint(stream, offset, &mut v);
                if n > 0 {
                    writeln!(out, "{}{}", indent(idt), v)?;
                }
                Ok(n)
            }
            MT_NINT => {
                let mut v = 0i64;
                let n = crate::integer::deserialize_int(stream, offset, &mut v);
                if n > 0 {
                    writeln!(out, "{}{}", indent(idt), v)?;
                }
                Ok(n)
            }
            MT_BSTR => match crate::bytes::deserialize_bstr_ref(stream, offset) {
                Some((bytes, n)) => {
                    let shown = &bytes[..bytes.len().min(self.limits.scratch_len)];
                    write!(out, "{}h'", indent(idt))?;
                    for b in shown {
                        write!(out, "{}", print_hex(*b))?;
                    }
                    if shown.len() < bytes.len() {
                        write!(out, "...")?;
                    }
                    writeln!(out, "'")?;
                    Ok(n)
                }
                None => Ok(0),
            },
            MT_TSTR => match crate::bytes::deserialize_tstr_ref(stream, offset) {
                Some((s, n)) => {
                    let shown = truncate_str(s, self.limits.scratch_len);
                    write!(out, "{}\"{}", indent(idt), shown)?;
                    if shown.len() < s.len() {
                        write!(out, "...")?;
                    }
                    writeln!(out, "\"")?;
                    Ok(n)
                }
                None => Ok(0),
            },
            MT_ARRAY => self.decode_array(stream, offset, idt, out),
            MT_MAP => self.decode_map(stream, offset, idt, out),
            MT_TAG => self.decode_tag(stream, offset, idt, out),
            MT_SIMPLE => self.decode_simple(stream, offset, idt, initial, out),
            _ => Ok(0),
        }
    }

    fn decode_array(
        &self,
        stream: &Stream,
        offset: usize,
        idt: u32,
        out: &mut dyn Write,
    ) -> std::io::Result<usize> {
        if idt >= self.limits.max_depth {
            writeln!(out, "{}<max depth exceeded>", indent(idt))?;
            return Ok(0);
        }
        use crate::container::{at_break, deserialize_array, Length};
        let (len, header_len) = deserialize_array(stream, offset);
        if header_len == 0 {
            return Ok(0);
        }
        let mut pos = offset + header_len;
        match len {
            Length::Definite(count) => {
                writeln!(out, "{}(array, length: {})", indent(idt), count)?;
                for _ in 0..count {
                    let n = self.decode_at(stream, pos, idt + 2, out)?;
                    if n == 0 {
                        return Ok(0);
                    }
                    pos += n;
                }
            }
            Length::Indefinite => {
                writeln!(out, "{}(array, length: [indefinite])", indent(idt))?;
                while !at_break(stream, pos) {
                    let n = self.decode_at(stream, pos, idt + 2, out)?;
                    if n == 0 {
                        return Ok(0);
                    }
                    pos += n;
                }
                pos += 1; // consume the break
            }
        }
        Ok(pos - offset)
    }

    fn decode_map(
        &self,
        stream: &Stream,
        offset: usize,
        idt: u32,
        out: &mut dyn Write,
    ) -> std::io::Result<usize> {
        if idt >= self.limits.max_depth {
            writeln!(out, "{}<max depth exceeded>", indent(idt))?;
            return Ok(0);
        }
        use crate::container::{at_break, deserialize_map, Length};
        let (len, header_len) = deserialize_map(stream, offset);
        if header_len == 0 {
            return Ok(0);
        }
        let mut pos = offset + header_len;
        match len {
            Length::Definite(count) => {
                writeln!(out, "{}(map, length: {})", indent(idt), count)?;
                for _ in 0..count {
                    let key_n = self.decode_at(stream, pos, idt + 1, out)?;
                    if key_n == 0 {
                        return Ok(0);
                    }
                    pos += key_n;
                    let val_n = self.decode_at(stream, pos, idt + 2, out)?;
                    if val_n == 0 {
                        return Ok(0);
                    }
                    pos += val_n;
                }
            }
            Length::Indefinite => {
                writeln!(out, "{}(map, length: [indefinite])", indent(idt))?;
                while !at_break(stream, pos) {
                    let key_n = self.decode_at(stream, pos, idt + 1, out)?;
                    if key_n == 0 {
                        return Ok(0);
                    }
                    pos += key_n;
                    let val_n = self.decode_at(stream, pos, idt + 2, out)?;
                    if val_n == 0 {
                        return Ok(0);
                    }
                    pos += val_n;
                }
                pos += 1;
            }
        }
        Ok(pos - offset)
    }

    fn decode_tag(
        &self,
        stream: &Stream,
        offset: usize,
        idt: u32,
        out: &mut dyn Write,
    ) -> std::io::Result<usize> {
        if idt >= self.limits.max_depth {
            writeln!(out, "{}<max depth exceeded>", indent(idt))?;
            return Ok(0);
        }
        let (tag, tag_len) = crate::tag::read_tag(stream, offset);
        if tag_len == 0 {
            return Ok(0);
        }
        #[cfg(feature = "datetime")]
        {
            if let Some((when, n)) = crate::tag::datetime::deserialize_date_time(stream, offset) {
                writeln!(out, "{}{} ( \"{}\" )", indent(idt), tag, when.format("%Y-%m-%dT%H:%M:%SZ"))?;
                return Ok(n);
            }
        }
        writeln!(out, "{}{} ( unknown content )", indent(idt), tag)?;
        // Tags don't add visual indentation, but still count as a nesting level so a run of
        // bare tag headers (e.g. repeated 0xC0) hits the depth limit instead of recursing forever.
        let item_n = self.decode_at(stream, offset + tag_len, idt + 1, out)?;
        if item_n == 0 {
            return Ok(tag_len);
        }
        Ok(tag_len + item_n)
    }

    fn decode_simple(
        &self,
        stream: &Stream,
        offset: usize,
        idt: u32,
        initial: u8,
        out: &mut dyn Write,
    ) -> std::io::Result<usize> {
        match initial {
            SIMPLE_FALSE => {
                writeln!(out, "{}false", indent(idt))?;
                Ok(1)
            }
            SIMPLE_TRUE => {
                writeln!(out, "{}true", indent(idt))?;
                Ok(1)
            }
            SIMPLE_NULL => {
                writeln!(out, "{}null", indent(idt))?;
                Ok(1)
            }
            SIMPLE_UNDEFINED => {
                writeln!(out, "{}undefined", indent(idt))?;
                Ok(1)
            }
            #[cfg(feature = "float")]
            SIMPLE_FLOAT16 => {
                let mut v = 0.0;
                let n = crate::float::deserialize_float16(stream, offset, &mut v);
                if n > 0 {
                    writeln!(out, "{}{}", indent(idt), v)?;
                }
                Ok(n)
            }
            #[cfg(feature = "float")]
            SIMPLE_FLOAT32 => {
                let mut v = 0.0;
                let n = crate::float::deserialize_float32(stream, offset, &mut v);
                if n > 0 {
                    writeln!(out, "{}{}", indent(idt), v)?;
                }
                Ok(n)
            }
            #[cfg(feature = "float")]
            SIMPLE_FLOAT64 => {
                let mut v = 0.0;
                let n = crate::float::deserialize_float64(stream, offset, &mut v);
                if n > 0 {
                    writeln!(out, "{}{}", indent(idt), v)?;
                }
                Ok(n)
            }
            _ => Ok(0),
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the encoded region of `stream` as a plain two-hex-digit-per-byte dump, independent of
/// CBOR structure. Useful when `Printer::decode` aborts partway through a malformed stream.
pub fn stream_print(stream: &Stream) -> String {
    let mut s = String::with_capacity(stream.position() * 2);
    for b in stream.as_slice() {
        s.push_str(print_hex(*b));
    }
    s
}

fn indent(idt: u32) -> String {
    let mut s = String::new();
    for _ in 0..(2 * idt) {
        s.push(' ');
    }
    s
}

/// Truncate `s` to at most `max_bytes` bytes, backing off to the nearest preceding UTF-8
/// character boundary so the result is always a valid `&str`.
fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Print a byte as two hex characters. The `{:#x}` formatter always prefixes "0x", which we do
/// not want in diagnostic output, so this is a plain lookup table instead.
fn print_hex(b: u8) -> &'static str {
    const TABLE: [&str; 256] = [
        "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "0a", "0b", "0c", "0d", "0e",
        "0f", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19", "1a", "1b", "1c", "1d",
        "1e", "1f", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "2a", "2b", "2c",
        "2d", "2e", "2f", "30", "31", "32", "33", "34", "35", "36", "37", "38", "39", "3a", "3b",
        "3c", "3d", "3e", "3f", "40", "41", "42", "43", "44", "45", "46", "47", "48", "49", "4a",
        "4b", "4c", "4d", "4e", "4f", "50", "51", "52", "53", "54", "55", "56", "57", "58", "59",
        "5a", "5b", "5c", "5d", "5e", "5f", "60", "61", "62", "63", "64", "65", "66", "67", "68",
        "69", "6a", "6b", "6c", "6d", "6e", "6f", "70", "71", "72", "73", "74", "75", "76", "77",
        "78", "79", "7a", "7b", "7c", "7d", "7e", "7f", "80", "81", "82", "83", "84", "85", "86",
        "87", "88", "89", "8a", "8b", "8c", "8d", "8e", "8f", "90", "91", "92", "93", "94", "95",
        "96", "97", "98", "99", "9a", "9b", "9c", "9d", "9e", "9f", "a0", "a1", "a2", "a3", "a4",
        "a5", "a6", "a7", "a8", "a9", "aa", "ab", "ac", "ad", "ae", "af", "b0", "b1", "b2", "b3",
        "b4", "b5", "b6", "b7", "b8", "b9", "ba", "bb", "bc", "bd", "be", "bf", "c0", "c1", "c2",
        "c3", "c4", "c5", "c6", "c7", "c8", "c9", "ca", "cb", "cc", "cd", "ce", "cf", "d0", "d1",
        "d2", "d3", "d4", "d5", "d6", "d7", "d8", "d9", "da", "db", "dc", "dd", "de", "df", "e0",
        "e1", "e2", "e3", "e4", "e5", "e6", "e7", "e8", "e9", "ea", "eb", "ec", "ed", "ee", "ef",
        "f0", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "fa", "fb", "fc", "fd", "fe",
        "ff",
    ];
    TABLE[b as usize]
}
