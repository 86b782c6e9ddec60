//! Memory footprint of scalar buffers.
//!
//! Allocates a contiguous buffer of a precision type and reports the address
//! span it occupies, so `float` and `double` buffers of the same length can be
//! compared directly (and watched from an external process monitor while the
//! buffer is held).

use std::mem::size_of;
use std::thread;
use std::time::Duration;

use log::debug;

use crate::engine::precision::Precision;
use crate::engine::types::BYTES_PER_MEGABYTE;


/// Address span of a buffer.
///
/// ## Fields
/// * `first`: address of element `0`.
/// * `end`: one past the last element.
/// * `element_size`: `size_of::<T>()`.
/// * `bytes`: `end - first`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FootprintStats {
    /// Address of the first element.
    pub first: usize,

    /// Address one past the last element.
    pub end: usize,

    /// Size of one element in bytes.
    pub element_size: usize,

    /// Bytes spanned by the buffer.
    pub bytes: usize,
}

impl FootprintStats {
    /// Span in megabytes (2^20 bytes).
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MEGABYTE
    }
}

/// A zero-filled buffer of `T` held for measurement.

#[derive(Debug)]
pub struct Footprint<T> {
    values: Vec<T>,
}

impl<T: Precision> Footprint<T> {
    /// Allocates `len` zeros of `T`.
    ///
    /// Allocation failure aborts the process; there is no partial result.
    pub fn allocate(len: usize) -> Self {
        debug!("allocating {} values of {}", len, T::NAME);
        Self { values: vec![T::zero(); len] }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` for an empty buffer.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Measures the buffer's address span.
    pub fn stats(&self) -> FootprintStats {
        let range = self.values.as_ptr_range();
        let first = range.start as usize;
        let end = range.end as usize;
        FootprintStats {
            first,
            end,
            element_size: size_of::<T>(),
            bytes: end - first,
        }
    }

    /// Keeps the buffer alive for `duration`.
    pub fn hold(&self, duration: Duration) {
        thread::sleep(duration);
    }

    /// Frees the buffer.
    pub fn release(self) {
        debug!("releasing {} values of {}", self.values.len(), T::NAME);
        drop(self.values);
    }
}
