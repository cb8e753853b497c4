//! OpenAPI document assembly.
//!
//! [`ApiDoc`] gathers every annotated handler and schema into one OpenAPI
//! specification: the user and post endpoints, the health probes, and the
//! payload shapes they reference. Swagger UI serves the result in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Post, User};
use crate::inbound::http::posts::CreatePostRequest;
use crate::inbound::http::users::CreateUserRequest;

/// Aggregated OpenAPI document for the service.
///
/// Debug builds expose it through Swagger UI at `/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wiki backend API",
        description = "CRUD surface for wiki users and posts, plus liveness and readiness probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Paths are relative to the serving origin")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::get_post,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, Post, Error, ErrorCode, CreateUserRequest, CreatePostRequest)),
    tags(
        (name = "users", description = "Create and fetch wiki users"),
        (name = "posts", description = "Create and fetch wiki posts"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Checks the published document against the wire contract.

    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_schema_lists(schema: &RefOr<Schema>, name: &str, fields: &[&str]) {
        let RefOr::T(Schema::Object(object)) = schema else {
            panic!("{name} should be an object schema");
        };
        for field in fields {
            assert!(
                object.properties.contains_key(*field),
                "{name} schema should list '{field}'"
            );
        }
    }

    #[rstest]
    #[case::error("Error", &["code", "message", "trace_id", "details"])]
    #[case::user("User", &["id", "name", "created_time"])]
    #[case::post("Post", &["post_id", "user_id", "content", "created_time"])]
    fn component_schemas_describe_their_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas
            .get(name)
            .unwrap_or_else(|| panic!("document should register the {name} schema"));

        assert_schema_lists(schema, name, fields);
    }

    #[test]
    fn every_contract_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/users",
            "/users/{id}",
            "/posts",
            "/posts/{id}",
            "/health",
            "/health/ready",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "OpenAPI document should describe {path}"
            );
        }
    }
}
