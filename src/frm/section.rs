//! Bounds-checked reads over a region of the `.frm` buffer.
//!
//! Every offset and length used by the section parsers comes from the file
//! itself, so nothing is sliced until it has been checked against the buffer
//! size. A failed check surfaces as [`FrmError::OutOfBounds`] naming the
//! structure that was being read.

use byteorder::{ByteOrder, LittleEndian};

use crate::FrmError;

/// Forward-only cursor over the whole file buffer.
///
/// Positions are absolute file offsets so that error messages point at the
/// real location of the damaged structure.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Section<'a> {
    /// Start a cursor at `offset`. Fails if the offset itself lies past the
    /// end of the buffer.
    pub fn at(data: &'a [u8], offset: usize, what: &'static str) -> Result<Self, FrmError> {
        if offset > data.len() {
            return Err(out_of_bounds(what, offset, 0, data.len()));
        }
        Ok(Section { data, pos: offset })
    }

    /// Current absolute offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Borrow the next `len` bytes and advance past them.
    pub fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8], FrmError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| out_of_bounds(what, self.pos, len, self.data.len()))?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Advance `len` bytes without reading them.
    pub fn skip(&mut self, len: usize, what: &'static str) -> Result<(), FrmError> {
        self.take(len, what).map(|_| ())
    }

    pub fn read_u8(&mut self, what: &'static str) -> Result<u8, FrmError> {
        Ok(self.take(1, what)?[0])
    }

    pub fn read_u16(&mut self, what: &'static str) -> Result<u16, FrmError> {
        Ok(LittleEndian::read_u16(self.take(2, what)?))
    }

    /// Borrow bytes up to (not including) the next `delim`, then advance past
    /// the delimiter. A missing delimiter is an overrun.
    pub fn take_until(&mut self, delim: u8, what: &'static str) -> Result<&'a [u8], FrmError> {
        let rest = &self.data[self.pos..];
        let n = rest
            .iter()
            .position(|&b| b == delim)
            .ok_or_else(|| out_of_bounds(what, self.pos, rest.len() + 1, self.data.len()))?;
        let slice = &rest[..n];
        self.pos += n + 1;
        Ok(slice)
    }
}

pub(crate) fn out_of_bounds(what: &'static str, offset: usize, len: usize, size: usize) -> FrmError {
    FrmError::OutOfBounds {
        what,
        offset,
        len,
        size,
    }
}
