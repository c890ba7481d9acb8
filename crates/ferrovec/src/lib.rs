//! ferrovec: a growable array built from raw allocation upward.
//!
//! This is the facade crate that re-exports the public API of the ferrovec
//! sub-crates. Most users only need the [`prelude`].
//!
//! # Quick start
//!
//! ```rust
//! use ferrovec::prelude::*;
//!
//! let mut names: DynArray<String> = DynArray::new();
//! names.push(String::from("alpha"));
//! names.emplace("beta");
//! assert_eq!(names.len(), 2);
//! assert_eq!(names.capacity(), 2);
//!
//! // Copies are deep and exact-fit.
//! let mut copy = names.clone();
//! copy[0].push_str("-copy");
//! assert_eq!(names[0], "alpha");
//!
//! // Moving out leaves an empty, reusable array.
//! let moved = names.take();
//! assert_eq!(moved.len(), 2);
//! assert!(names.is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`alloc`] | `ferrovec-alloc` | `RawAllocator`, `OwnedBlock`, `AllocError` |
//! | [`array`] | `ferrovec-array` | `DynArray`, `GrowthConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Raw typed allocation and single-owner blocks (`ferrovec-alloc`).
pub use ferrovec_alloc as alloc;

/// The growable array and its growth policy (`ferrovec-array`).
pub use ferrovec_array as array;

/// Common imports for typical ferrovec usage.
///
/// ```rust
/// use ferrovec::prelude::*;
/// ```
pub mod prelude {
    pub use ferrovec_alloc::AllocError;
    pub use ferrovec_array::{DynArray, GrowthConfig};
}
