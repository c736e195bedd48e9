//! The memory-resource seam and its system-heap implementation.

#![allow(unsafe_code)]

use std::ptr;

use crate::{fault, platform};

/// Raw aligned allocation, the seam the toolkit programs against.
///
/// Implementations are stateless policies: each call stands alone, and
/// the only cross-call contract is that every successful
/// [`allocate`](MemoryResource::allocate) is matched by exactly one
/// [`deallocate`](MemoryResource::deallocate) with the identical
/// `(bytes, alignment)` pair. Neither method unwinds.
pub trait MemoryResource {
    /// Allocate at least `bytes` bytes aligned to `alignment`.
    ///
    /// Returns null, without a diagnostic, when `bytes` is zero (a valid
    /// no-op request). Returns null with one error diagnostic when
    /// `alignment` is zero or not a power of two, or when the underlying
    /// platform facility fails.
    fn allocate(&self, bytes: usize, alignment: usize) -> *mut u8;

    /// Release storage previously obtained from
    /// [`allocate`](MemoryResource::allocate).
    ///
    /// A null `ptr` is a no-op. An invalid `(bytes, alignment)` pair is
    /// logged and the call becomes a no-op. Faults raised by the
    /// underlying release routine are captured and logged, never
    /// propagated.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by a prior
    /// [`allocate`](MemoryResource::allocate) on the same resource with
    /// the identical `(bytes, alignment)` pair, and must not have been
    /// released already. The pair is not independently verified —
    /// outstanding allocations are not tracked.
    unsafe fn deallocate(&self, ptr: *mut u8, bytes: usize, alignment: usize);
}

/// Check that `bytes` is non-zero and `alignment` is a power of two.
///
/// A zero `bytes` is a valid no-op request and fails silently; a bad
/// alignment is a caller error and is logged. `is_power_of_two` is
/// false for zero, so the zero-alignment case needs no separate test.
fn verify_args(op: &str, bytes: usize, alignment: usize) -> bool {
    if bytes == 0 {
        return false;
    }
    if !alignment.is_power_of_two() {
        log::error!("{op}: invalid bytes = {bytes}, alignment = {alignment}");
        return false;
    }
    true
}

/// Stateless allocator over the process heap.
///
/// Alignments up to [`natural_alignment`](crate::natural_alignment) take
/// the standard allocator; larger alignments take the platform's
/// over-aligned facility. See the [crate docs](crate) for the caller
/// contract.
///
/// ```
/// use sluice_alloc::{MemoryResource, SystemResource};
///
/// let heap = SystemResource;
/// let ptr = heap.allocate(256, 64);
/// assert!(!ptr.is_null());
/// assert_eq!(ptr as usize % 64, 0);
/// unsafe { heap.deallocate(ptr, 256, 64) };
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResource;

impl MemoryResource for SystemResource {
    fn allocate(&self, bytes: usize, alignment: usize) -> *mut u8 {
        if !verify_args("allocate", bytes, alignment) {
            return ptr::null_mut();
        }
        if alignment <= platform::natural_alignment() {
            platform::alloc_natural(bytes)
        } else {
            platform::alloc_over_aligned(bytes, alignment)
        }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, bytes: usize, alignment: usize) {
        if ptr.is_null() {
            return;
        }
        if !verify_args("deallocate", bytes, alignment) {
            return;
        }
        if alignment <= platform::natural_alignment() {
            fault::absorb("release", bytes, alignment, (), || {
                // SAFETY: the caller guarantees ptr came from a
                // natural-path allocate with this geometry.
                unsafe { platform::release_natural(ptr, bytes) }
            });
        } else {
            fault::absorb("aligned release", bytes, alignment, (), || {
                // SAFETY: the caller guarantees ptr came from an
                // over-aligned allocate with this geometry.
                unsafe { platform::release_over_aligned(ptr, bytes, alignment) }
            });
        }
    }
}
