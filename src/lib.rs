/***************************************************************************************************
 * Copyright (c) 2020-2022, Qualcomm Innovation Center, Inc. All rights reserved.
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
 * corecbor module definition
 *
 * A small, memory-efficient CBOR (RFC 8949) encoder and decoder for constrained systems. Encoding
 * writes into a caller-supplied fixed buffer; decoding walks a byte slice with an explicit cursor.
 * Neither path allocates unless the `alloc` feature is enabled.
 **************************************************************************************************/
#![cfg_attr(not(feature = "std"), no_std)]
/*!
corecbor: a small implementation of CBOR (RFC 8949) for bare-metal embedded systems.

Every serializer takes a [`Stream`](stream::Stream) and a value, and returns the number of bytes
written, or `0` if the value did not fit. Every deserializer takes a byte slice and an offset, and
returns the number of bytes consumed, or `0` if the item at that offset was not of the requested
type or ran past the end of the slice. Richer, `Result`-returning variants (`try_serialize_*`,
`try_deserialize_*`) are exported by [`error`] for callers who want to distinguish *why* an
operation failed instead of only that it failed.

# Example

```
use corecbor::{stream::Stream, integer, container};

let mut buf = [0u8; 16];
let mut stream = Stream::new(&mut buf);

container::serialize_array(&mut stream, 2);
integer::serialize_uint(&mut stream, 1);
integer::serialize_uint(&mut stream, 2);

assert_eq!(stream.position(), 3);
assert_eq!(stream.as_slice(), &[0x82, 0x01, 0x02]);
```
*/

// Pull in std if we are testing or if it is defined as a feature (because we run tests on a
// platform supporting I/O and full feature set.
#[cfg(any(feature = "std", test))]
extern crate std;

// If we are really building no_std, pull in core as well. It is aliased as std so that "use"
// statements are always the same regardless of which configuration is active.
#[cfg(all(not(feature = "std"), not(test)))]
extern crate core as std;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(feature = "float", test))]
extern crate half;

#[cfg(any(feature = "datetime", test))]
extern crate chrono;

pub mod argument;
pub mod bytes;
pub mod constants;
pub mod container;
pub mod error;
#[cfg(any(feature = "float", test))]
pub mod float;
#[cfg(any(feature = "float", test))]
pub mod half16;
pub mod integer;
#[cfg(any(feature = "std", test))]
pub mod pretty;
pub mod simple;
pub mod stream;
pub mod tag;

pub use error::CBORError;
pub use stream::Stream;
