//! Platform allocation paths.
//!
//! One function pair per path: the natural path delegates to the C
//! allocator, the over-aligned path to the platform's aligned facility —
//! `posix_memalign` on unix, `aligned_malloc` on windows, `std::alloc`
//! everywhere else. Selection happens at compile time, and the release
//! routines mirror the acquisition routines exactly.
//!
//! Callers are responsible for argument verification; every function
//! here assumes `bytes > 0` and a power-of-two `alignment`.

#![allow(unsafe_code)]

use std::mem;

/// The maximum alignment the platform's standard allocator already
/// guarantees.
///
/// Requests at or below this take the plain `malloc`/`free` path;
/// anything larger takes the platform's over-aligned facility.
#[cfg(unix)]
pub const fn natural_alignment() -> usize {
    mem::align_of::<libc::max_align_t>()
}

/// The maximum alignment the platform's standard allocator already
/// guarantees.
///
/// Requests at or below this take the plain `malloc`/`free` path;
/// anything larger takes the platform's over-aligned facility.
#[cfg(windows)]
pub const fn natural_alignment() -> usize {
    // MEMORY_ALLOCATION_ALIGNMENT: 16 on 64-bit, 8 on 32-bit.
    mem::size_of::<usize>() * 2
}

/// The maximum alignment the platform's standard allocator already
/// guarantees.
///
/// Requests at or below this take the plain `malloc`/`free` path;
/// anything larger takes the platform's over-aligned facility.
#[cfg(not(any(unix, windows)))]
pub const fn natural_alignment() -> usize {
    mem::align_of::<u128>()
}

/// Acquire `bytes` of storage at natural alignment.
///
/// Returns whatever the standard allocator returns — null on
/// exhaustion, without a diagnostic.
#[cfg(any(unix, windows))]
pub(crate) fn alloc_natural(bytes: usize) -> *mut u8 {
    // SAFETY: malloc accepts any size; a null return is handled by the
    // caller.
    unsafe { libc::malloc(bytes).cast() }
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn alloc_natural(bytes: usize) -> *mut u8 {
    alloc_over_aligned(bytes, natural_alignment())
}

/// Acquire `bytes` of storage at an over-sized `alignment`.
///
/// Underlying failures are logged with the request geometry and the
/// platform's error text, then re-expressed as a null return.
#[cfg(unix)]
pub(crate) fn alloc_over_aligned(bytes: usize, alignment: usize) -> *mut u8 {
    let mut out: *mut libc::c_void = std::ptr::null_mut();
    // SAFETY: `out` is a valid write target. `alignment` is a power of
    // two above max_align_t, which satisfies the sizeof(void*) multiple
    // requirement of posix_memalign.
    let ret = unsafe { libc::posix_memalign(&mut out, alignment, bytes) };
    if ret != 0 {
        log::error!(
            "posix_memalign(alignment = {alignment}, bytes = {bytes}) failed: {}",
            std::io::Error::from_raw_os_error(ret)
        );
        return std::ptr::null_mut();
    }
    out.cast()
}

#[cfg(windows)]
pub(crate) fn alloc_over_aligned(bytes: usize, alignment: usize) -> *mut u8 {
    // SAFETY: alignment is a power of two, as _aligned_malloc requires.
    let out = unsafe { libc::aligned_malloc(bytes, alignment) };
    if out.is_null() {
        log::error!("aligned_malloc(alignment = {alignment}, bytes = {bytes}) failed");
    }
    out.cast()
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn alloc_over_aligned(bytes: usize, alignment: usize) -> *mut u8 {
    use std::alloc::Layout;

    crate::fault::absorb(
        "alloc",
        bytes,
        alignment,
        std::ptr::null_mut(),
        || match Layout::from_size_align(bytes, alignment) {
            // SAFETY: the layout has a non-zero size, verified by the
            // caller.
            Ok(layout) => unsafe { std::alloc::alloc(layout) },
            Err(err) => {
                log::error!("alloc(alignment = {alignment}, bytes = {bytes}) failed: {err}");
                std::ptr::null_mut()
            }
        },
    )
}

/// Release storage acquired through [`alloc_natural`].
///
/// # Safety
///
/// `ptr` must come from an [`alloc_natural`] call for `bytes`, and be
/// released exactly once.
#[cfg(any(unix, windows))]
pub(crate) unsafe fn release_natural(ptr: *mut u8, _bytes: usize) {
    // SAFETY: upheld by the caller.
    unsafe { libc::free(ptr.cast()) }
}

/// Release storage acquired through [`alloc_natural`].
///
/// # Safety
///
/// `ptr` must come from an [`alloc_natural`] call for `bytes`, and be
/// released exactly once.
#[cfg(not(any(unix, windows)))]
pub(crate) unsafe fn release_natural(ptr: *mut u8, bytes: usize) {
    // SAFETY: upheld by the caller.
    unsafe { release_over_aligned(ptr, bytes, natural_alignment()) }
}

/// Release storage acquired through [`alloc_over_aligned`] with the
/// same `(bytes, alignment)` pair.
///
/// # Safety
///
/// `ptr` must come from [`alloc_over_aligned`] with the identical
/// geometry, and be released exactly once.
#[cfg(unix)]
pub(crate) unsafe fn release_over_aligned(ptr: *mut u8, _bytes: usize, _alignment: usize) {
    // posix_memalign storage is returned through free.
    // SAFETY: upheld by the caller.
    unsafe { libc::free(ptr.cast()) }
}

#[cfg(windows)]
pub(crate) unsafe fn release_over_aligned(ptr: *mut u8, _bytes: usize, _alignment: usize) {
    // SAFETY: upheld by the caller.
    unsafe { libc::aligned_free(ptr.cast()) }
}

#[cfg(not(any(unix, windows)))]
pub(crate) unsafe fn release_over_aligned(ptr: *mut u8, bytes: usize, alignment: usize) {
    use std::alloc::Layout;

    match Layout::from_size_align(bytes, alignment) {
        // SAFETY: upheld by the caller — the geometry matches the
        // original allocation.
        Ok(layout) => unsafe { std::alloc::dealloc(ptr, layout) },
        Err(err) => {
            log::error!("dealloc(alignment = {alignment}, bytes = {bytes}) failed: {err}");
        }
    }
}
