//! Diesel row structs private to the persistence adapters.
//!
//! Rows exist to satisfy Diesel's typing of queries and inserts; the domain
//! only ever sees [`crate::domain::User`] and [`crate::domain::Post`] built
//! from them. Nothing here leaves this module tree.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{posts, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub created_time: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
///
/// `id` and `created_time` are omitted so the store assigns them; inserts
/// read the assigned values back via `RETURNING`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
}

/// Row struct for reading from the posts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_time: DateTime<Utc>,
}

/// Insertable struct for creating new post records.
///
/// `post_id` and `created_time` are omitted so the store assigns them;
/// inserts read the assigned values back via `RETURNING`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub user_id: i32,
    pub content: &'a str,
}
