//! # Shelf Common
//!
//! Building blocks shared by the catalog library and the command line:
//!
//! * **[`value`]** and **[`mapping`]**: dynamically typed, insertion-ordered key/value maps.
//! * **[`grouping`]**: bucketing of any sequence by a derived key.
//! * **[`collections`]**: stack and queue primitives.
//! * **[`text`]**, **[`validate`]**, **[`numbers`]**: small stateless helpers.
//! * **[`config`]**, **[`error`]**, **[`log`]**: the ambient pieces every crate uses.

pub mod collections;
pub mod config;
pub mod error;
pub mod grouping;
pub mod log;
pub mod mapping;
pub mod numbers;
pub mod text;
pub mod validate;
pub mod value;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
