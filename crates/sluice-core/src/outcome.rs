//! The generic outcome container.
//!
//! An [`Outcome`] is built exactly once, at the point a fallible
//! operation completes, and read through accessors afterwards — it is
//! never mutated. Callers branch on [`ok`](Outcome::ok) (or bridge into
//! `std::result` with the per-category `into_result`) and hand the
//! container to `Display` for diagnostics.
//!
//! Constructing a failure form without a meaningful descriptor is a
//! documented precondition violation, not a runtime-checked one; no
//! method here panics.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::ptr;

use crate::category::{Category, Integral, IntegralPayload, Plain, Pointer, Unit};
use crate::code::ErrorCode;

/// Couples a computed value (or no value) with a success/failure
/// indicator and an [`ErrorCode`] descriptor.
///
/// The payload category `C` decides the storage layout, the accepted
/// construction shapes, and the diagnostic rendering — see the
/// [`category`](crate::category) module. Whatever the category, an
/// `Outcome` is a plain value: no heap, no virtual dispatch, immutable
/// after construction, and safe to hand across threads whenever its
/// payload is.
///
/// ```
/// use sluice_core::{ErrorCode, Integral, Outcome};
///
/// let found = Outcome::<Integral<u32>>::from_value(7);
/// assert!(found.ok());
/// assert_eq!(found.value(), 7);
///
/// let missing = Outcome::<Integral<u32>>::from_error(ErrorCode::new(2));
/// assert!(!missing.ok());
/// assert_eq!(missing.error(), ErrorCode::new(2));
/// ```
pub struct Outcome<C: Category> {
    storage: C::Storage,
}

/// The default outcome shape for numeric status codes.
pub type OutcomeCode = Outcome<Integral<u64>>;

impl<C: Category> Outcome<C> {
    fn from_storage(storage: C::Storage) -> Self {
        Outcome { storage }
    }

    /// `true` iff no error was recorded. This is the boolean reading of
    /// the whole container.
    pub fn ok(&self) -> bool {
        C::ok(&self.storage)
    }

    /// The recorded descriptor; falsy when [`ok`](Outcome::ok).
    pub fn error(&self) -> ErrorCode {
        C::error(&self.storage)
    }
}

impl Outcome<Unit> {
    /// The success form: no error recorded.
    pub fn success() -> Self {
        Self::from_storage(ErrorCode::OK)
    }

    /// Record `code` as the outcome; [`ErrorCode::OK`] yields the
    /// success form.
    pub fn from_error(code: ErrorCode) -> Self {
        Self::from_storage(code)
    }

    /// Bridge into `std::result` for `?` propagation.
    pub fn into_result(self) -> Result<(), ErrorCode> {
        if self.ok() {
            Ok(())
        } else {
            Err(self.error())
        }
    }
}

impl Default for Outcome<Unit> {
    /// An unresolved failure carrying [`ErrorCode::UNSPECIFIED`].
    fn default() -> Self {
        Self::from_storage(ErrorCode::UNSPECIFIED)
    }
}

impl<T: IntegralPayload> Outcome<Integral<T>> {
    /// The success form carrying `value`.
    pub fn from_value(value: T) -> Self {
        Self::from_storage((value, ErrorCode::OK))
    }

    /// A failure carrying the category default and `code`.
    pub fn from_error(code: ErrorCode) -> Self {
        Self::from_storage((T::DEFAULT, code))
    }

    /// An explicit `(value, code)` pair, preserved as-is.
    pub fn new(value: T, code: ErrorCode) -> Self {
        Self::from_storage((value, code))
    }

    /// The "return value doubles as its own error code" form.
    ///
    /// With `ok == true` the descriptor is [`ErrorCode::OK`]. With
    /// `ok == false`, a value equal to the category default cannot double
    /// as its own code and [`ErrorCode::UNSPECIFIED`] is substituted; any
    /// other value is reinterpreted through
    /// [`IntegralPayload::as_code`].
    pub fn from_flag(value: T, ok: bool) -> Self {
        let code = if ok {
            ErrorCode::OK
        } else if value == T::DEFAULT {
            ErrorCode::UNSPECIFIED
        } else {
            value.as_code()
        };
        Self::from_storage((value, code))
    }

    /// The stored value, success or failure alike.
    pub fn value(&self) -> T {
        self.storage.0
    }

    /// Bridge into `std::result` for `?` propagation.
    pub fn into_result(self) -> Result<T, ErrorCode> {
        if self.ok() {
            Ok(self.value())
        } else {
            Err(self.error())
        }
    }
}

impl<T: IntegralPayload> Default for Outcome<Integral<T>> {
    /// An unresolved failure carrying the category default and
    /// [`ErrorCode::UNSPECIFIED`].
    fn default() -> Self {
        Self::from_storage((T::DEFAULT, ErrorCode::UNSPECIFIED))
    }
}

impl<T> Outcome<Pointer<T>> {
    /// Wrap an allocation result: a non-null `ptr` is the success form,
    /// a null `ptr` records [`ErrorCode::NULL_RESULT`].
    pub fn from_ptr(ptr: *mut T) -> Self {
        let code = if ptr.is_null() {
            ErrorCode::NULL_RESULT
        } else {
            ErrorCode::OK
        };
        Self::from_storage((ptr, code))
    }

    /// A null result carrying an explicit descriptor, preserved
    /// verbatim.
    pub fn from_error(code: ErrorCode) -> Self {
        Self::from_storage((ptr::null_mut(), code))
    }

    /// An explicit `(ptr, code)` pair, preserved as-is.
    pub fn new(ptr: *mut T, code: ErrorCode) -> Self {
        Self::from_storage((ptr, code))
    }

    /// The stored pointer, success or failure alike.
    pub fn value(&self) -> *mut T {
        self.storage.0
    }

    /// Bridge into `std::result` for `?` propagation.
    pub fn into_result(self) -> Result<*mut T, ErrorCode> {
        if self.ok() {
            Ok(self.value())
        } else {
            Err(self.error())
        }
    }
}

impl<T> Default for Outcome<Pointer<T>> {
    /// An unresolved failure carrying a null pointer and
    /// [`ErrorCode::UNSPECIFIED`].
    fn default() -> Self {
        Self::from_storage((ptr::null_mut(), ErrorCode::UNSPECIFIED))
    }
}

impl<T: fmt::Debug> Outcome<Plain<T>> {
    /// The success form carrying `value`.
    pub fn from_value(value: T) -> Self {
        Self::from_storage((value, ErrorCode::OK))
    }

    /// An explicit `(value, code)` pair, preserved as-is.
    pub fn new(value: T, code: ErrorCode) -> Self {
        Self::from_storage((value, code))
    }

    /// The stored value, success or failure alike.
    pub fn value(&self) -> &T {
        &self.storage.0
    }

    /// Bridge into `std::result`, surrendering the payload.
    pub fn into_result(self) -> Result<T, ErrorCode> {
        let (value, code) = self.storage;
        if code.is_ok() {
            Ok(value)
        } else {
            Err(code)
        }
    }
}

impl<T: fmt::Debug + Default> Outcome<Plain<T>> {
    /// A failure carrying the payload default and `code`.
    pub fn from_error(code: ErrorCode) -> Self {
        Self::from_storage((T::default(), code))
    }
}

impl<T: fmt::Debug + Default> Default for Outcome<Plain<T>> {
    /// An unresolved failure carrying the payload default and
    /// [`ErrorCode::UNSPECIFIED`].
    fn default() -> Self {
        Self::from_storage((T::default(), ErrorCode::UNSPECIFIED))
    }
}

impl<T: IntegralPayload> Deref for Outcome<Integral<T>> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.storage.0
    }
}

impl<T> Deref for Outcome<Pointer<T>> {
    type Target = *mut T;

    fn deref(&self) -> &*mut T {
        &self.storage.0
    }
}

impl<T: fmt::Debug> Deref for Outcome<Plain<T>> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.storage.0
    }
}

impl<C: Category> Clone for Outcome<C>
where
    C::Storage: Clone,
{
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<C: Category> Copy for Outcome<C> where C::Storage: Copy {}

impl<C: Category> PartialEq for Outcome<C>
where
    C::Storage: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<C: Category> Eq for Outcome<C> where C::Storage: Eq {}

impl<C: Category> Hash for Outcome<C>
where
    C::Storage: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

impl<C: Category> fmt::Debug for Outcome<C>
where
    C::Storage: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("storage", &self.storage)
            .finish()
    }
}

impl<C: Category> fmt::Display for Outcome<C> {
    /// The diagnostic rendering: `succ`/`fail` plus the category's
    /// payload detail. Deterministic for a given instance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.ok() { "succ" } else { "fail" })?;
        C::describe(&self.storage, f)
    }
}
