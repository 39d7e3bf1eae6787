//! Growable destination buffer for quoted output.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

/// A growable byte buffer with explicit spare capacity.
///
/// The backing storage is kept fully initialized: the vector's length is the
/// buffer's total *capacity*, while `len` tracks the committed content.
/// [`quote`][`crate::quote::quote`] writes into the spare region
/// (`capacity - len`) and commits only after a complete pass, so the
/// committed content always holds whole quoting units.
///
/// Growth is fallible and never happens implicitly; allocation exhaustion
/// surfaces as [`TryReserveError`] instead of aborting.
#[derive(Debug, Default)]
pub struct QuoteBuf {
    /// Backing storage; its length is the total capacity.
    buf: Vec<u8>,
    /// Content length, not the buffer size.
    len: usize,
}

impl QuoteBuf {
    /// Creates an empty buffer with no capacity.
    ///
    /// No allocation happens until the first quoting pass overflows.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed content length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no content has been committed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total capacity, spare region included.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the committed content.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Discards the content, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Truncates the content to the specified length.
    ///
    /// # Panics
    ///
    /// Panics if `new_len` is longer than the current content length.
    pub fn truncate(&mut self, new_len: usize) {
        if self.len < new_len {
            panic!("[precondition] truncation should make the content shorter");
        }
        self.len = new_len;
    }

    /// Extracts the committed content as a vector, dropping spare capacity.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<u8> {
        self.buf.truncate(self.len);
        self.buf
    }

    /// Returns the writable spare region after the committed content.
    #[inline]
    pub(crate) fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.len..]
    }

    /// Commits a new content length.
    ///
    /// # Panics
    ///
    /// Panics if `new_len` exceeds the capacity.
    pub(crate) fn set_len(&mut self, new_len: usize) {
        if self.buf.len() < new_len {
            panic!("[precondition] committed content should fit the capacity");
        }
        self.len = new_len;
    }

    /// Grows the total capacity to at least `min_capacity`.
    ///
    /// Fails only on allocation exhaustion; the content is untouched either
    /// way. Zero-fills the new spare region so the whole capacity stays
    /// initialized.
    pub(crate) fn grow(&mut self, min_capacity: usize) -> Result<(), TryReserveError> {
        if min_capacity <= self.buf.len() {
            return Ok(());
        }
        self.buf.try_reserve_exact(min_capacity - self.buf.len())?;
        self.buf.resize(min_capacity, 0);
        Ok(())
    }
}
