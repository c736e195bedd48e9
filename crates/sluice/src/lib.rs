//! Sluice: core result and aligned-allocation primitives for an IPC
//! toolkit.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Sluice sub-crates. For most users, adding `sluice` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! // A fallible lookup reporting through an integral outcome.
//! fn find_slot(occupied: &[u64], want: u64) -> OutcomeCode {
//!     match occupied.iter().position(|&slot| slot == want) {
//!         Some(index) => OutcomeCode::from_value(index as u64),
//!         None => OutcomeCode::from_error(ErrorCode::new(2)),
//!     }
//! }
//!
//! let found = find_slot(&[3, 5, 8], 5);
//! assert!(found.ok());
//! assert_eq!(found.value(), 1);
//! assert_eq!(found.to_string(), "succ, value = 1");
//!
//! // Raw aligned storage from the process heap.
//! let heap = SystemResource;
//! let ptr = heap.allocate(256, 64);
//! assert!(!ptr.is_null());
//! assert_eq!(ptr as usize % 64, 0);
//! unsafe { heap.deallocate(ptr, 256, 64) };
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sluice-core` | `ErrorCode`, `Outcome`, payload categories |
//! | [`mem`] | `sluice-alloc` | `MemoryResource`, `SystemResource` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error descriptor and outcome container (`sluice-core`).
///
/// Contains [`types::ErrorCode`], the category markers, and the
/// [`types::Outcome`] container every fallible Sluice operation reports
/// through.
pub use sluice_core as types;

/// Aligned raw-memory allocation (`sluice-alloc`).
///
/// Contains the [`mem::MemoryResource`] seam and its process-heap
/// implementation [`mem::SystemResource`].
pub use sluice_alloc as mem;

/// Common imports for typical Sluice usage.
///
/// ```rust
/// use sluice::prelude::*;
/// ```
pub mod prelude {
    // Result primitives
    pub use sluice_core::{
        Category, ErrorCode, Integral, IntegralPayload, Outcome, OutcomeCode, Plain, Pointer,
        Unit,
    };

    // Aligned allocation
    pub use sluice_alloc::{natural_alignment, MemoryResource, SystemResource};
}
