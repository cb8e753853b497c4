//! Wiki backend library: domain types, ports, and the adapters around them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// OpenAPI document consumed by Swagger UI and external tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attached by the server builder.
pub use middleware::Trace;
