//! Internal traversal building blocks.
//!
//! This module is intentionally `pub(crate)` so the traversal algorithms can
//! share their bookkeeping without exposing it as part of the public API.

pub(crate) mod frame;
pub(crate) mod visited;
