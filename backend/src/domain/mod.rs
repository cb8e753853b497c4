//! Domain types and the ports the adapters plug into.
//!
//! Everything here is framework-free. Entities validate their invariants in
//! their constructors and document their serde contracts on the type; the
//! adapters above and below this layer only ever see values that already
//! hold.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic error payload and taxonomy.
//! - User / Post — wiki entities with store-assigned identity.
//! - TraceId — request correlation identifier in task-local storage.
//! - ports — hexagonal seams implemented by outbound adapters.

pub mod error;
pub mod ports;
pub mod post;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::post::{Post, PostContent, PostId, PostValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserName, UserValidationError};
