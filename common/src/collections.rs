//! Last-in-first-out and first-in-first-out containers.
//!
//! Taking from an empty container yields `None` and leaves it untouched.

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;
