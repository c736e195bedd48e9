//! Core result primitives for the Sluice IPC toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error-reporting convention every fallible operation in the wider
//! toolkit follows: an opaque [`ErrorCode`] descriptor and the
//! category-dispatched [`Outcome`] container that couples a computed
//! value (or no value) with that descriptor.
//!
//! # Architecture
//!
//! ```text
//! Outcome<C: Category>           one storage word pair, no heap, no panics
//! ├── Unit                       bare ErrorCode ("did it work")
//! ├── Integral<T>                (T, ErrorCode), T a primitive integer
//! ├── Pointer<T>                 (*mut T, ErrorCode)
//! └── Plain<T>                   (T, ErrorCode), any Debug payload
//! ```
//!
//! The category set is closed and selected statically through the sealed
//! [`Category`] trait — there is no runtime polymorphism and no
//! allocation anywhere in this crate. Construction is gated per category
//! by dedicated factories, so an argument shape a category does not
//! support simply does not exist as a callable function.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod category;
pub mod code;
pub mod outcome;

// Public re-exports for the primary API surface.
pub use category::{Category, Integral, IntegralPayload, Plain, Pointer, Unit};
pub use code::ErrorCode;
pub use outcome::{Outcome, OutcomeCode};
