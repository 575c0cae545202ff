//! Configuration for customizing [`SetOnceMap`](crate::SetOnceMap) storage.
//!
//! The [`Config`] trait selects the hasher used for the underlying table and
//! the capacity reserved up front. [`DefaultConfig`] is suitable for most
//! uses.
//!
//! # Creating Custom Configurations
//!
//! ```rust
//! use std::hash::RandomState;
//!
//! use qbice_set_once_map::{Config, SetOnceMap};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
//! struct TokenRegistryConfig;
//!
//! impl Config for TokenRegistryConfig {
//!     // keys come from untrusted input
//!     type BuildHasher = RandomState;
//!
//!     fn initial_capacity() -> usize { 1024 }
//! }
//!
//! let tokens = SetOnceMap::<String, u64, TokenRegistryConfig>::new();
//! assert!(tokens.is_empty());
//! ```

use std::{fmt::Debug, hash::BuildHasher};

use fxhash::FxBuildHasher;

/// Configuration trait for [`SetOnceMap`](crate::SetOnceMap).
///
/// # Required Associated Types
///
/// ## `BuildHasher`
///
/// The hasher builder for the key table. A fresh instance is created with
/// [`Default`] for every map.
pub trait Config: Debug + Send + Sync + 'static {
    /// The hasher builder used by the key table.
    type BuildHasher: BuildHasher + Default + Clone + Send + Sync + 'static;

    /// The number of entries reserved when a map is created with
    /// [`SetOnceMap::new`](crate::SetOnceMap::new).
    ///
    /// Defaults to `0`, which allocates lazily on the first insertion.
    #[must_use]
    fn initial_capacity() -> usize { 0 }
}

/// The default configuration, hashing keys with [`FxBuildHasher`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct DefaultConfig;

impl Config for DefaultConfig {
    type BuildHasher = FxBuildHasher;
}
