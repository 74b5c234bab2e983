/***************************************************************************************************
 * Copyright (c) 2021-2023 Qualcomm Innovation Center, Inc. All rights reserved.
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
 * corecbor error API
 **************************************************************************************************/
use std::result;

#[cfg(any(feature = "std", test))]
use thiserror::Error;

/// An alias for `Result<T, CBORError>` used throughout this crate.
pub type Result<T> = result::Result<T, CBORError>;

/// `CBORError` classifies why an encode or decode step refused to produce a result. Every
/// public bytes-in/bytes-out function collapses any of these into a `0` return; callers who
/// need the detail use the `try_*` functions re-exported alongside the plain ones.
#[cfg_attr(any(feature = "std", test), derive(Copy, Clone, Error, Debug, PartialEq, Eq))]
#[cfg_attr(all(not(feature = "std"), not(test)), derive(Copy, Clone, Debug, PartialEq, Eq))]
pub enum CBORError {
    /// The stream does not have enough remaining capacity to hold the item being serialized.
    #[cfg_attr(any(feature = "std", test), error("insufficient buffer capacity to encode item"))]
    CapacityExhausted,
    /// The initial byte (or tag) at the given offset does not carry the major type the caller
    /// asked to decode.
    #[cfg_attr(any(feature = "std", test), error("item at offset is not of the requested type"))]
    TypeMismatch,
    /// The argument's follow-up bytes, or a string's payload, run past the end of the data
    /// currently held in the stream.
    #[cfg_attr(any(feature = "std", test), error("item is truncated"))]
    Truncated,
    /// A string deserialization target is too small to hold the payload plus its terminator.
    #[cfg_attr(any(feature = "std", test), error("output buffer too small for decoded string"))]
    OutputTooSmall,
    /// The requested operation is outside what this encoding supports (e.g. a negative epoch
    /// for tag 1, or a tag number that does not fit the single-byte form requested).
    #[cfg_attr(any(feature = "std", test), error("operation is not supported"))]
    Unsupported,
    /// The initial byte uses a reserved additional-info value (28-30).
    #[cfg_attr(any(feature = "std", test), error("reserved additional information value"))]
    MalformedEncoding,
}
