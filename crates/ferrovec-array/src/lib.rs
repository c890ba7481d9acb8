//! Growable contiguous array with explicit element lifecycle.
//!
//! [`DynArray`] is a value-semantic container built directly on
//! [`ferrovec_alloc`]: it acquires raw blocks, constructs elements into
//! them, relocates them on growth, and drops them exactly once.
//!
//! # Lifecycle at a glance
//!
//! | Operation | API | Allocates | Fails |
//! |---|---|---|---|
//! | default construction | [`DynArray::new`] | no | never |
//! | copy construction | `clone` / [`DynArray::try_clone`] | exact fit | OOM |
//! | move construction | [`DynArray::take`] | no | never |
//! | copy assignment | `clone_from` / [`DynArray::try_clone_from`] | if too small | OOM |
//! | move assignment | [`DynArray::move_from`] | no | never |
//! | append | `push` / `emplace` / `emplace_with` | on growth | OOM |
//!
//! Growth follows [`GrowthConfig`]: 1 slot, then doubling.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod dyn_array;
mod transfer;

pub use config::GrowthConfig;
pub use dyn_array::DynArray;
pub use ferrovec_alloc::AllocError;
