//! Printable quoting of arbitrary bytes.
//!
//! Non-printable bytes render as `\xhh` (two lowercase hex digits, four
//! bytes per escape); printable ASCII renders verbatim. The output is a
//! one-way diagnostic encoding: safe to append to a log line at any
//! truncation point, not meant to be parsed back.

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::collections::TryReserveError;

#[cfg(feature = "alloc")]
use crate::buffer::QuoteBuf;

/// Lowercase hex digits for escape rendering.
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Bytes emitted after a truncated [`write_quoted`] output.
#[cfg(feature = "std")]
const TRUNCATION_MARKER: &[u8] = b"... (truncated)";

/// Checks if the byte renders verbatim.
///
/// The predicate is locale-independent: exactly the printable ASCII range,
/// space included.
fn is_printable(b: u8) -> bool {
    matches!(b, 0x20..=0x7e)
}

/// An error indicating that the destination could not hold the full quoted
/// output.
///
/// The quoted prefix already written is still valid; [`written`] bytes of
/// it are complete units (never a torn escape). Recoverable by retrying
/// into a larger destination — [`quote`] does exactly that.
///
/// [`written`]: OverflowError::written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowError {
    /// Number of destination bytes holding complete units.
    written: usize,
}

impl OverflowError {
    /// Returns the number of valid bytes written before the overflow.
    #[inline]
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("destination buffer does not have enough capacity for the quoted output")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for OverflowError {}

/// Quotes `src` into the fixed-capacity `dst` and returns the number of
/// bytes written.
///
/// Each printable source byte takes one destination byte, every other byte
/// takes a four-byte `\xhh` escape. If the destination cannot hold the next
/// whole unit, quoting stops at the last complete unit and reports
/// [`OverflowError`] carrying the still-valid written length.
///
/// # Examples
///
/// ```
/// use conn_string::quote::quote_data;
///
/// let mut buf = [0_u8; 16];
/// let n = quote_data(&mut buf, b"ok\x01").expect("fits");
/// assert_eq!(&buf[..n], b"ok\\x01");
/// ```
pub fn quote_data(dst: &mut [u8], src: &[u8]) -> Result<usize, OverflowError> {
    let mut idx = 0;
    for &b in src {
        if is_printable(b) {
            if dst.len() - idx < 1 {
                return Err(OverflowError { written: idx });
            }
            dst[idx] = b;
            idx += 1;
        } else {
            if dst.len() - idx < 4 {
                return Err(OverflowError { written: idx });
            }
            dst[idx] = b'\\';
            dst[idx + 1] = b'x';
            dst[idx + 2] = HEX_DIGITS[usize::from(b >> 4)];
            dst[idx + 3] = HEX_DIGITS[usize::from(b & 0x0f)];
            idx += 4;
        }
    }
    Ok(idx)
}

/// Quotes `src` onto the end of a growable destination.
///
/// Runs [`quote_data`] against the destination's spare capacity; on
/// overflow, grows the destination to twice its total capacity (16 at
/// minimum) and retries the same input from scratch. The fixed pass is a
/// pure function of its inputs, so the retry converges; the required
/// capacity is bounded by `4 * src.len()` past the already-committed
/// content. On success the emitted length is committed onto the previous
/// content length.
///
/// # Errors
///
/// Only allocation exhaustion from growing the destination, which is not
/// retried.
///
/// # Examples
///
/// ```
/// use conn_string::buffer::QuoteBuf;
/// use conn_string::quote::quote;
///
/// let mut buf = QuoteBuf::new();
/// quote(&mut buf, b"MSG \x00\x01")?;
/// assert_eq!(buf.as_bytes(), b"MSG \\x00\\x01");
/// # Ok::<_, std::collections::TryReserveError>(())
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn quote(dst: &mut QuoteBuf, src: &[u8]) -> Result<(), TryReserveError> {
    loop {
        let len = dst.len();
        match quote_data(dst.spare_mut(), src) {
            Ok(n) => {
                dst.set_len(len + n);
                return Ok(());
            }
            Err(_) => {
                let capacity = dst.capacity();
                let want = if capacity == 0 { 16 } else { capacity * 2 };
                dst.grow(want)?;
            }
        }
    }
}

/// Quotes `bytes` to a stream, best effort.
///
/// Uses a bounded stack buffer; output whose quoted form exceeds it is cut
/// at the last complete unit and followed by a literal `... (truncated)`
/// marker. This wrapper intentionally does not grow — it is for diagnostic
/// output, not lossless encoding; use [`quote`] for that.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn write_quoted<W: std::io::Write>(writer: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    let mut buf = [0_u8; 256];
    match quote_data(&mut buf, bytes) {
        Ok(n) => writer.write_all(&buf[..n]),
        Err(e) => {
            writer.write_all(&buf[..e.written()])?;
            writer.write_all(TRUNCATION_MARKER)
        }
    }
}

/// A proxy to print a byte slice in quoted form.
///
/// `Display` writes the quoted text as-is; `Debug` additionally wraps it in
/// double quotes. Unlike [`write_quoted`] this is not bounded — `fmt`
/// drives the whole slice through the formatter.
///
/// # Examples
///
/// ```
/// use conn_string::quote::Quoted;
///
/// assert_eq!(format!("{}", Quoted(b"a\x00b")), "a\\x00b");
/// assert_eq!(format!("{:?}", Quoted(b"a\x00b")), "\"a\\x00b\"");
/// ```
#[derive(Clone, Copy)]
pub struct Quoted<'a>(
    /// Raw bytes to render.
    pub &'a [u8],
);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.iter().position(|&b| !is_printable(b)) {
            // The printable run is ASCII, so it is valid UTF-8.
            let (run, tail) = rest.split_at(pos);
            if let Ok(run) = core::str::from_utf8(run) {
                f.write_str(run)?;
            }
            write!(f, "\\x{:02x}", tail[0])?;
            rest = &tail[1..];
        }
        if let Ok(run) = core::str::from_utf8(rest) {
            f.write_str(run)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}
