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
 * corecbor tags (major type 6)
 *
 * `write_tag`/`read_tag` are the generic primitive: a tag is a bare number immediately followed
 * by its tagged item, which the caller serializes/deserializes separately. Tags 0 (date-time
 * string) and 1 (epoch seconds) get dedicated helpers when the `datetime` feature pulls in chrono.
 **************************************************************************************************/
use crate::argument::{decode_argument, encode_argument};
use crate::constants::{AI_PAYLOAD_MAX, MT_MASK, MT_TAG};
use crate::stream::Stream;

/// Write a tag number (major type 6). Valid for any `u64` tag; single-byte form is used whenever
/// the tag fits in 0..=23, exactly as any other argument would be. Returns bytes written or `0`
/// on capacity failure.
pub fn write_tag(stream: &mut Stream, tag: u64) -> usize {
    encode_argument(stream, MT_TAG, tag)
}

/// True if the byte at `offset` has major type 6 (a tag header).
pub fn at_tag(stream: &Stream, offset: usize) -> bool {
    stream.at_end(offset) || matches!(stream.byte_at(offset), Ok(b) if b & MT_MASK == MT_TAG)
}

/// Decode the tag number at `offset`. Returns `(tag, bytes consumed)`, or `0` consumed if the
/// item is not a tag.
pub fn read_tag(stream: &Stream, offset: usize) -> (u64, usize) {
    decode_argument(stream, offset, MT_TAG).unwrap_or((0, 0))
}

/// True if `tag` fits the legacy single-byte tag form (`0xC0 | tag`, tags 0..=23).
pub fn fits_single_byte(tag: u64) -> bool {
    tag <= AI_PAYLOAD_MAX as u64
}

#[cfg(any(feature = "datetime", test))]
pub mod datetime {
    //! Tag 0 (RFC 3339 date-time string) and tag 1 (epoch seconds) helpers.
    use super::*;
    use crate::bytes::{deserialize_tstr_ref, serialize_tstr};
    use crate::integer::{serialize_uint, try_deserialize_uint};
    use chrono::{DateTime, TimeZone, Utc};

    pub const TAG_DATETIME: u64 = 0;
    pub const TAG_EPOCH: u64 = 1;

    /// Write tag 0 followed by `when` formatted as `YYYY-MM-DDTHH:MM:SSZ` (20 characters, no
    /// fractional seconds). Returns total bytes written (tag + string) or `0` on capacity
    /// failure.
    pub fn serialize_date_time(stream: &mut Stream, when: &DateTime<Utc>) -> usize {
        let checkpoint = stream.checkpoint();
        let tag_len = write_tag(stream, TAG_DATETIME);
        if tag_len == 0 {
            return 0;
        }
        let mut formatted = [0u8; 24];
        let text = format_rfc3339(when, &mut formatted);
        let str_len = serialize_tstr(stream, text);
        if str_len == 0 {
            stream.restore(checkpoint);
            return 0;
        }
        tag_len + str_len
    }

    /// Write tag 1 followed by `when`'s Unix epoch seconds as an unsigned integer. Negative
    /// epochs (dates before 1970) are not supported; returns `0` for those.
    pub fn serialize_epoch(stream: &mut Stream, when: &DateTime<Utc>) -> usize {
        let secs = when.timestamp();
        if secs < 0 {
            return 0;
        }
        let checkpoint = stream.checkpoint();
        let tag_len = write_tag(stream, TAG_EPOCH);
        if tag_len == 0 {
            return 0;
        }
        let int_len = serialize_uint(stream, secs as u64);
        if int_len == 0 {
            stream.restore(checkpoint);
            return 0;
        }
        tag_len + int_len
    }

    /// Deserialize a tag-0 or tag-1 date-time at `offset`. Returns `(value, bytes consumed)`, or
    /// `0` consumed if the item is not tag 0 or tag 1, or its content does not parse.
    pub fn deserialize_date_time(stream: &Stream, offset: usize) -> Option<(DateTime<Utc>, usize)> {
        let (tag, tag_len) = read_tag(stream, offset);
        if tag_len == 0 {
            return None;
        }
        match tag {
            TAG_DATETIME => {
                let (text, str_len) = deserialize_tstr_ref(stream, offset + tag_len)?;
                let parsed = DateTime::parse_from_rfc3339(text).ok()?;
                Some((parsed.with_timezone(&Utc), tag_len + str_len))
            }
            TAG_EPOCH => {
                let (secs, int_len) = try_deserialize_uint(stream, offset + tag_len).ok()?;
                let secs = i64::try_from(secs).ok()?;
                Some((Utc.timestamp_opt(secs, 0).single()?, tag_len + int_len))
            }
            _ => None,
        }
    }

    /// Format `when` as `YYYY-MM-DDTHH:MM:SSZ` into `scratch`, returning the written `&str`.
    /// Avoids `alloc`/`String` so this helper stays usable without the `alloc` feature.
    fn format_rfc3339<'a>(when: &DateTime<Utc>, scratch: &'a mut [u8; 24]) -> &'a str {
        use core::fmt::Write;
        struct SliceWriter<'b> {
            buf: &'b mut [u8],
            len: usize,
        }
        impl<'b> Write for SliceWriter<'b> {
            fn write_str(&mut self, s: &str) -> core::fmt::Result {
                let bytes = s.as_bytes();
                if self.len + bytes.len() > self.buf.len() {
                    return Err(core::fmt::Error);
                }
                self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
                self.len += bytes.len();
                Ok(())
            }
        }
        let mut writer = SliceWriter { buf: scratch.as_mut_slice(), len: 0 };
        write!(writer, "{}", when.format("%Y-%m-%dT%H:%M:%SZ")).expect("20 chars fits in 24");
        let len = writer.len;
        core::str::from_utf8(&scratch[..len]).expect("formatted output is ASCII")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::serialize_uint;

    #[test]
    fn single_byte_tag_form() {
        let mut buf = [0u8; 2];
        let mut s = Stream::new(&mut buf);
        assert_eq!(write_tag(&mut s, 0), 1);
        assert_eq!(s.as_slice(), &[0xC0]);
    }

    #[test]
    fn multi_byte_tag_form() {
        let mut buf = [0u8; 4];
        let mut s = Stream::new(&mut buf);
        assert_eq!(write_tag(&mut s, 1000), 3);
    }

    #[test]
    fn tag_round_trip_with_tagged_item() {
        let mut buf = [0u8; 4];
        let mut s = Stream::new(&mut buf);
        let tag_len = write_tag(&mut s, 32);
        let item_len = serialize_uint(&mut s, 7);
        assert!(at_tag(&s, 0));
        let (tag, n) = read_tag(&s, 0);
        assert_eq!(tag, 32);
        assert_eq!(n, tag_len);
        assert_eq!(n + item_len, s.position());
    }
}
