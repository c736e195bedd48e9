//! The opaque error descriptor carried by every [`Outcome`](crate::Outcome).

use std::error::Error;
use std::fmt;

/// An opaque, equality-comparable error descriptor.
///
/// A descriptor is falsy when its raw code is zero ([`ErrorCode::OK`]);
/// any non-zero code records a failure. The catalog mapping codes to
/// messages lives with the subsystems that produce them — this type only
/// transports the number.
///
/// Two codes are reserved:
///
/// - [`ErrorCode::UNSPECIFIED`]: a failure was recorded but no descriptor
///   was supplied.
/// - [`ErrorCode::NULL_RESULT`]: a null pointer result arrived with no
///   out-of-band descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(i64);

impl ErrorCode {
    /// No error.
    pub const OK: ErrorCode = ErrorCode(0);

    /// Reserved: a failure was recorded but no descriptor was supplied.
    ///
    /// The integral category also substitutes this code when a failing
    /// value equals the category default and therefore cannot double as
    /// its own code.
    pub const UNSPECIFIED: ErrorCode = ErrorCode(i64::MAX);

    /// Reserved: a null pointer result with no out-of-band descriptor.
    pub const NULL_RESULT: ErrorCode = ErrorCode(-1);

    /// Wrap a raw numeric code.
    pub const fn new(raw: i64) -> Self {
        ErrorCode(raw)
    }

    /// The raw numeric code.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// `true` iff this descriptor records no error.
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// `true` iff this descriptor records an error.
    pub const fn is_err(self) -> bool {
        self.0 != 0
    }
}

impl From<i64> for ErrorCode {
    fn from(raw: i64) -> Self {
        ErrorCode(raw)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for ErrorCode {}
