//! Aligned raw-memory allocation for the Sluice IPC toolkit.
//!
//! [`SystemResource`] requests and releases raw storage of a given size
//! and alignment over the process heap, absorbing platform differences
//! behind one no-panic surface: argument violations and every underlying
//! platform failure are logged through the `log` facade and re-expressed
//! as a null return. Nothing in this crate unwinds into the caller.
//!
//! # Architecture
//!
//! ```text
//! MemoryResource (trait seam)
//! └── SystemResource
//!     ├── natural path      — C malloc/free (alignment <= max_align_t)
//!     └── over-aligned path — posix_memalign (unix) / aligned_malloc
//!                             (windows) / std::alloc (elsewhere),
//!                             releases wrapped in the fault boundary
//! ```
//!
//! # Caller contract
//!
//! Every successful [`MemoryResource::allocate`] must be matched by
//! exactly one [`MemoryResource::deallocate`] with the identical
//! `(bytes, alignment)` pair. Outstanding allocations are not tracked,
//! so a mismatch is not detected here — it is undefined behavior in the
//! underlying allocator.
//!
//! This is the one Sluice crate permitted bounded `unsafe`; every block
//! carries a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod fault;
mod platform;
pub mod resource;

// Public re-exports for the primary API surface.
pub use platform::natural_alignment;
pub use resource::{MemoryResource, SystemResource};
