//! REST endpoints and the shared state they run against.

pub mod error;
pub mod health;
pub mod posts;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
