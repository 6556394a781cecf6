//! Byte sink and byte source seams
//!
//! The codec never owns a buffer. It writes through a [`ByteSink`] and reads
//! through a [`ByteSource`], so the surrounding replication layer can plug in
//! its own stream types. Both use little-endian `f32`.

use byteorder::{ByteOrder, LittleEndian};

/// Sequential writer.
///
/// The encoder calls [`reserve`](Self::reserve) once with the exact encoded
/// size, then issues writes totalling exactly that many bytes.
pub trait ByteSink {
    /// Make room for `additional` bytes
    fn reserve(&mut self, additional: usize);

    /// Append one byte
    fn put_u8(&mut self, value: u8);

    /// Append a little-endian `f32`
    fn put_f32(&mut self, value: f32);

    /// Append raw bytes
    fn put_slice(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put_u8(b);
        }
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    #[inline]
    fn put_u8(&mut self, value: u8) {
        self.push(value);
    }

    #[inline]
    fn put_f32(&mut self, value: f32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_f32(&mut buf, value);
        self.extend_from_slice(&buf);
    }

    #[inline]
    fn put_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn reserve(&mut self, additional: usize) {
        (**self).reserve(additional);
    }

    fn put_u8(&mut self, value: u8) {
        (**self).put_u8(value);
    }

    fn put_f32(&mut self, value: f32) {
        (**self).put_f32(value);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        (**self).put_slice(bytes);
    }
}

/// Random-access reader over absolute offsets.
///
/// Reads never advance an implicit cursor; the decoder computes every offset
/// from the cursor it was given. Out-of-range reads return `None`.
pub trait ByteSource {
    /// Total readable length in bytes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte at `offset`
    fn read_u8_at(&self, offset: usize) -> Option<u8>;

    /// Little-endian `f32` starting at `offset`
    fn read_f32_at(&self, offset: usize) -> Option<f32>;

    /// `N` raw bytes starting at `offset`
    fn read_array_at<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        let mut out = [0u8; N];
        for (i, b) in out.iter_mut().enumerate() {
            *b = self.read_u8_at(offset.checked_add(i)?)?;
        }
        Some(out)
    }
}

impl ByteSource for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn read_u8_at(&self, offset: usize) -> Option<u8> {
        self.get(offset).copied()
    }

    #[inline]
    fn read_f32_at(&self, offset: usize) -> Option<f32> {
        let end = offset.checked_add(4)?;
        self.get(offset..end).map(LittleEndian::read_f32)
    }

    #[inline]
    fn read_array_at<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        let end = offset.checked_add(N)?;
        self.get(offset..end)?.try_into().ok()
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn read_u8_at(&self, offset: usize) -> Option<u8> {
        self.as_slice().read_u8_at(offset)
    }

    #[inline]
    fn read_f32_at(&self, offset: usize) -> Option<f32> {
        self.as_slice().read_f32_at(offset)
    }

    #[inline]
    fn read_array_at<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        self.as_slice().read_array_at(offset)
    }
}
