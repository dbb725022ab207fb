//! # Shelf Core
//!
//! The book catalog: the [`record::Record`] value type and the
//! [`catalog`] operations that extract, filter, fill, describe, sort and
//! group sequences of records.
//!
//! Everything is synchronous and side-effect free; callers own all data.

pub mod catalog;
pub mod record;
pub mod sample;

pub use record::{Field, Record};
