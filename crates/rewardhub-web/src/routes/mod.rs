//! Route handlers.

pub mod dashboard;
