//! Diesel table definitions for the wiki schema.
//!
//! Kept in lockstep with the SQL under `migrations/`; a drift between the two
//! surfaces as a type error in the repositories rather than at runtime. After
//! editing a migration, regenerate with `diesel print-schema` or adjust by
//! hand.

diesel::table! {
    /// Registered wiki users.
    ///
    /// The `id` column is a store-assigned serial primary key.
    users (id) {
        /// Primary key assigned by the store on insert.
        id -> Int4,
        /// Name supplied at creation.
        name -> Text,
        /// Insertion timestamp; defaults to `now()` server-side.
        created_time -> Timestamptz,
    }
}

diesel::table! {
    /// Posts authored by registered users.
    ///
    /// `user_id` carries a foreign key constraint against `users.id`; the
    /// store rejects inserts referencing a missing user.
    posts (post_id) {
        /// Primary key assigned by the store on insert.
        post_id -> Int4,
        /// Author; constrained to reference `users.id`.
        user_id -> Int4,
        /// Body text supplied at creation.
        content -> Text,
        /// Insertion timestamp; defaults to `now()` server-side.
        created_time -> Timestamptz,
    }
}

diesel::joinable!(posts -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(posts, users);
