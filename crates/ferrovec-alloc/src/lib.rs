//! Raw typed allocation for ferrovec containers.
//!
//! This crate owns every call into the global allocator made by the
//! workspace. Containers never allocate directly; they hold an
//! [`OwnedBlock`] and let it talk to [`RawAllocator`].
//!
//! # Architecture
//!
//! ```text
//! OwnedBlock<T> (single owner, frees on drop)
//! └── RawAllocator<T> (stateless, allocate / deallocate pair)
//!     └── std::alloc global allocator
//! ```
//!
//! Neither type ever constructs or drops a `T`. Element lifetime is the
//! caller's responsibility; storage lifetime is this crate's.
//!
//! `unsafe` is confined to `raw.rs` and `block.rs`, each call carrying a
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod block;
pub mod error;
pub mod raw;

pub use block::OwnedBlock;
pub use error::AllocError;
pub use raw::RawAllocator;
