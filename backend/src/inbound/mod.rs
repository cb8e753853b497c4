//! Inbound adapters: the edges where external requests become domain calls.
//!
//! Only HTTP exists today, under [`http`]. Framework types stop here; the
//! domain below sees ports and plain values.

pub mod http;
