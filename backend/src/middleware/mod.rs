//! Middleware applied around every route.
//!
//! Currently just [`Trace`], which correlates each request with a trace
//! identifier.

pub mod trace;

pub use trace::Trace;
