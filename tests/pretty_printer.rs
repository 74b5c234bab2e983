/***************************************************************************************************
 * Copyright (c) 2021, 2022 Qualcomm Innovation Center, Inc. All rights reserved.
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
#![cfg(feature = "std")]
extern crate corecbor;

use corecbor::container::{serialize_break, serialize_indefinite_map, serialize_map};
use corecbor::integer::serialize_uint;
use corecbor::pretty::{stream_print, Printer};
use corecbor::stream::Stream;
use corecbor::tag::write_tag;

#[test]
fn prints_nested_map_with_indentation() {
    let mut buf = [0u8; 32];
    let mut s = Stream::new(&mut buf);
    serialize_map(&mut s, 1);
    serialize_uint(&mut s, 1);
    serialize_map(&mut s, 1);
    serialize_uint(&mut s, 2);
    serialize_uint(&mut s, 3);

    let mut out = Vec::new();
    Printer::new().decode(&s, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("(map, length: 1)"));
    assert!(text.lines().any(|l| l.trim() == "2"));
}

#[test]
fn prints_indefinite_map_and_tag() {
    let mut buf = [0u8; 32];
    let mut s = Stream::new(&mut buf);
    write_tag(&mut s, 55799); // unknown tag, no dedicated formatter
    serialize_indefinite_map(&mut s);
    serialize_uint(&mut s, 1);
    serialize_uint(&mut s, 2);
    serialize_break(&mut s);

    let mut out = Vec::new();
    Printer::new().decode(&s, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("55799 ( unknown content )"));
    assert!(text.contains("(map, length: [indefinite])"));
}

#[test]
fn hex_dump_matches_wire_bytes() {
    let mut buf = [0u8; 4];
    let mut s = Stream::new(&mut buf);
    serialize_uint(&mut s, 255);
    assert_eq!(stream_print(&s), "18ff");
}
