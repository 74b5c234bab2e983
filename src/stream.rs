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
 * corecbor stream buffer
 *
 * A fixed-capacity byte window with a write cursor. Every serializer in this crate writes through
 * a `Stream`; every deserializer reads the stream's encoded region by offset. The buffer may be
 * borrowed from the caller or, with the `alloc` feature, acquired internally.
 **************************************************************************************************/
use crate::error::CBORError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

enum Backing<'buf> {
    Borrowed(&'buf mut [u8]),
    #[cfg(feature = "alloc")]
    Owned(Vec<u8>),
}

impl<'buf> Backing<'buf> {
    fn as_slice(&self) -> &[u8] {
        match self {
            Backing::Borrowed(b) => b,
            #[cfg(feature = "alloc")]
            Backing::Owned(v) => v.as_slice(),
        }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Backing::Borrowed(b) => b,
            #[cfg(feature = "alloc")]
            Backing::Owned(v) => v.as_mut_slice(),
        }
    }
}

/// A fixed-capacity output buffer with a write cursor, and the input window deserializers read
/// from. `position` is both "the number of bytes written so far" and "the index of the next free
/// byte".
pub struct Stream<'buf> {
    bytes: Backing<'buf>,
    position: usize,
}

impl<'buf> Stream<'buf> {
    /// Bind an externally-provided buffer. `position` starts at 0; the buffer's prior contents
    /// are not read until something is written or `position` is advanced with `set_position`.
    pub fn new(buf: &'buf mut [u8]) -> Self {
        Stream { bytes: Backing::Borrowed(buf), position: 0 }
    }

    /// Wrap a byte slice that already holds encoded CBOR, for decoding. `position` is set to the
    /// full length of the slice so that `at_end`/iteration see the whole thing as "written".
    pub fn from_encoded(buf: &'buf mut [u8]) -> Self {
        let position = buf.len();
        Stream { bytes: Backing::Borrowed(buf), position }
    }

    /// Acquire an internally-owned buffer of `capacity` bytes, zero-filled. Requires the `alloc`
    /// feature.
    #[cfg(feature = "alloc")]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut v = Vec::with_capacity(capacity);
        v.resize(capacity, 0);
        Stream { bytes: Backing::Owned(v), position: 0 }
    }

    /// Total capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.bytes.as_slice().len()
    }

    /// Number of bytes written so far; also the index of the next free byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reset the write cursor to the start of the buffer. Does not zero the buffer.
    pub fn clear(&mut self) {
        self.position = 0;
    }

    /// The encoded region of the buffer, `bytes[0..position]`.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes.as_slice()[0..self.position]
    }

    /// True once `offset` has reached or passed the end of the encoded data.
    pub fn at_end(&self, offset: usize) -> bool {
        offset >= self.position
    }

    /// Whether `len` bytes starting at `self.position` fit within capacity. The single bounds
    /// check every serializer goes through.
    pub(crate) fn fits(&self, len: usize) -> bool {
        self.position.checked_add(len).map_or(false, |end| end <= self.bytes.as_slice().len())
    }

    /// Whether `len` bytes starting at `offset` fit within the encoded region (`position`), used
    /// by deserializers so reads never cross into uninitialized buffer tail.
    pub(crate) fn within(&self, offset: usize, len: usize) -> bool {
        offset.checked_add(len).map_or(false, |end| end <= self.position)
    }

    /// Write `src` at the current position and advance it. Returns `CapacityExhausted` and
    /// leaves the stream unchanged if it does not fit.
    pub(crate) fn write_bytes(&mut self, src: &[u8]) -> Result<(), CBORError> {
        if !self.fits(src.len()) {
            return Err(CBORError::CapacityExhausted);
        }
        let start = self.position;
        self.bytes.as_mut_slice()[start..start + src.len()].copy_from_slice(src);
        self.position += src.len();
        Ok(())
    }

    /// Write a single byte at the current position and advance it.
    pub(crate) fn write_byte(&mut self, val: u8) -> Result<(), CBORError> {
        self.write_bytes(&[val])
    }

    /// Byte at `offset`, if it lies within the encoded region.
    pub(crate) fn byte_at(&self, offset: usize) -> Result<u8, CBORError> {
        if !self.within(offset, 1) {
            return Err(CBORError::Truncated);
        }
        Ok(self.bytes.as_slice()[offset])
    }

    /// Slice of `len` bytes starting at `offset`, if it lies within the encoded region.
    pub(crate) fn slice_at(&self, offset: usize, len: usize) -> Result<&[u8], CBORError> {
        if !self.within(offset, len) {
            return Err(CBORError::Truncated);
        }
        Ok(&self.bytes.as_slice()[offset..offset + len])
    }

    /// Snapshot the write cursor so a multi-step write can be rolled back on failure.
    pub fn checkpoint(&self) -> usize {
        self.position
    }

    /// Restore the write cursor to a value previously returned by `checkpoint`.
    pub fn restore(&mut self, checkpoint: usize) {
        self.position = checkpoint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stream_is_empty() {
        let mut buf = [0u8; 8];
        let s = Stream::new(&mut buf);
        assert_eq!(s.position(), 0);
        assert_eq!(s.capacity(), 8);
        assert!(s.at_end(0));
    }

    #[test]
    fn write_bytes_advances_position() {
        let mut buf = [0u8; 4];
        let mut s = Stream::new(&mut buf);
        s.write_bytes(&[1, 2, 3]).unwrap();
        assert_eq!(s.position(), 3);
        assert_eq!(s.as_slice(), &[1, 2, 3]);
        assert!(s.write_bytes(&[4, 5]).is_err());
        assert_eq!(s.position(), 3, "failed write must not partially advance position");
    }

    #[test]
    fn clear_resets_position_not_contents() {
        let mut buf = [0u8; 4];
        let mut s = Stream::new(&mut buf);
        s.write_bytes(&[9, 9]).unwrap();
        s.clear();
        assert_eq!(s.position(), 0);
        assert!(s.at_end(0));
    }

    #[test]
    fn checkpoint_restore_rolls_back() {
        let mut buf = [0u8; 4];
        let mut s = Stream::new(&mut buf);
        let cp = s.checkpoint();
        s.write_bytes(&[1, 2]).unwrap();
        s.restore(cp);
        assert_eq!(s.position(), 0);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn with_capacity_owns_a_zero_filled_buffer() {
        let mut s = Stream::with_capacity(4);
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.position(), 0);
        assert!(s.at_end(0));

        s.write_bytes(&[1, 2, 3]).unwrap();
        assert_eq!(s.as_slice(), &[1, 2, 3]);
        assert!(s.write_bytes(&[4, 5]).is_err(), "owned buffer still enforces its capacity");
    }
}
