//! The fault-capturing boundary around platform release/allocation
//! calls.
//!
//! Converts any panic escaping the underlying call into the local
//! null/unit vocabulary: the payload text is logged at error severity
//! together with the request geometry, and the caller-supplied fallback
//! value is returned instead. The boundary itself never unwinds.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Run `call`, converting an escaping panic into `fallback`.
///
/// `op` names the operation for the diagnostic record. The closures
/// passed here own everything they touch, so no shared state can be
/// observed mid-update after a capture.
pub(crate) fn absorb<R>(
    op: &str,
    bytes: usize,
    alignment: usize,
    fallback: R,
    call: impl FnOnce() -> R,
) -> R {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(value) => value,
        Err(payload) => {
            log::error!(
                "{op}(bytes = {bytes}, alignment = {alignment}) failed: {}",
                payload_text(payload.as_ref())
            );
            fallback
        }
    }
}

/// Best-effort text for a panic payload.
fn payload_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text
    } else {
        "unknown fault"
    }
}
