/***************************************************************************************************
 * Copyright (c) 2020-2022 Qualcomm Innovation Center, Inc. All rights reserved.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of this software
 * and associated documentation files (the “Software”), to deal in the Software without
 * restriction, including without limitation the rights to use, copy, modify, merge, publish,
 * distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice (including the next
 * paragraph) shall be included in all copies or substantial portions of the
 * Software.
 *
 * THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING
 * BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
 * NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
 * DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
 **************************************************************************************************/
/***************************************************************************************************
 * Test cases for corecbor: bugfixes and adversarial cases
 **************************************************************************************************/
extern crate corecbor;

use corecbor::container::{serialize_array, serialize_map};
use corecbor::integer::{deserialize_uint, serialize_int, serialize_uint};
use corecbor::stream::Stream;

#[test]
fn nested_array_as_first_item() {
    let mut buf = [0u8; 16];
    let mut s = Stream::new(&mut buf);
    serialize_array(&mut s, 2);
    serialize_array(&mut s, 2);
    serialize_uint(&mut s, 1);
    serialize_uint(&mut s, 2);
    serialize_array(&mut s, 2);
    serialize_uint(&mut s, 3);
    serialize_uint(&mut s, 4);
    assert_eq!(s.as_slice(), &[0x82, 0x82, 0x01, 0x02, 0x82, 0x03, 0x04]);
}

#[test]
fn decoder_accepts_non_shortest_form() {
    // 0 encoded the long way, as a 2-byte argument (0x19 0x00 0x00) instead of the shortest
    // single-byte form. The encoder never emits this; the decoder must still accept it.
    let mut raw = [0x19u8, 0x00, 0x00];
    let s = Stream::from_encoded(&mut raw);
    let mut v = 1u64;
    let n = deserialize_uint(&s, 0, &mut v);
    assert_eq!(n, 3);
    assert_eq!(v, 0);
}

#[test]
fn capacity_exhaustion_leaves_stream_unchanged() {
    let mut buf = [0u8; 2];
    let mut s = Stream::new(&mut buf);
    assert_eq!(serialize_uint(&mut s, 1000), 0, "1000 needs 3 bytes, buffer only has 2");
    assert_eq!(s.position(), 0);
}

#[test]
fn map_header_count_is_pairs_not_items() {
    let mut buf = [0u8; 8];
    let mut s = Stream::new(&mut buf);
    serialize_map(&mut s, 1);
    serialize_uint(&mut s, 1);
    serialize_uint(&mut s, 2);
    assert_eq!(s.as_slice(), &[0xA1, 0x01, 0x02]);
}

#[test]
fn i64_min_does_not_overflow_on_negation() {
    let mut buf = [0u8; 16];
    let mut s = Stream::new(&mut buf);
    let n = serialize_int(&mut s, i64::MIN);
    assert_eq!(n, 9, "i64::MIN needs the full 8-byte argument form");
    assert_eq!(s.as_slice()[0], 0x3B);
}

#[test]
fn truncated_argument_bytes_fail_closed() {
    // Initial byte claims a 4-byte argument follows (major 0, AI 26) but only 2 are present.
    let mut raw = [0x1Au8, 0x00, 0x00];
    let s = Stream::from_encoded(&mut raw);
    let mut v = 0u64;
    assert_eq!(deserialize_uint(&s, 0, &mut v), 0);
}
