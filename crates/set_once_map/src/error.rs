//! Error kinds reported by [`SetOnceMap`](crate::SetOnceMap) operations.

/// An illegal operation on a [`SetOnceMap`](crate::SetOnceMap).
///
/// All variants are ordinary, recoverable outcomes. The map never logs or
/// panics on them and leaves its contents untouched when one is returned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    thiserror::Error,
)]
pub enum Error {
    /// The key argument was absent.
    #[error("key is absent")]
    NullKey,

    /// The value argument to [`set`](crate::SetOnceMap::set) was absent.
    #[error("value is absent")]
    NullValue,

    /// [`set`](crate::SetOnceMap::set) was called with a key that is already
    /// present.
    #[error("key already exists in the map")]
    DuplicateKey,

    /// The key is not present in the map.
    #[error("key is not set in the map")]
    KeyNotFound,
}
