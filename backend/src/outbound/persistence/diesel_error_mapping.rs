//! Shared Diesel error mapping for the wiki repositories.
//!
//! Raw driver errors never cross the port boundary. Each helper logs the
//! Diesel detail at `debug!` and hands back a port error built from a static
//! message, keeping driver text out of anything a client might see.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific unavailable-error constructor.
pub(crate) fn map_basic_pool_error<E, U>(error: PoolError, unavailable: U) -> E
where
    U: FnOnce(String) -> E,
{
    let PoolError::Checkout { message } = error;
    unavailable(message)
}

fn log_diesel_failure(error: &diesel::result::Error) {
    use diesel::result::Error as DieselError;

    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }
}

/// Map common Diesel error variants into query/unavailable constructors.
///
/// Both repositories share the same baseline: `NotFound` and query-builder
/// failures read as query errors, while a dropped connection reads as store
/// unavailability.
pub(crate) fn map_basic_diesel_error<E, Q, U>(
    error: diesel::result::Error,
    query: Q,
    unavailable: U,
) -> E
where
    Q: Fn(&'static str) -> E,
    U: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    log_diesel_failure(&error);

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            unavailable("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}

/// Variant of [`map_basic_diesel_error`] for tables carrying a foreign key.
///
/// Foreign key violations get their own constructor so inbound adapters can
/// answer them as conflicts rather than opaque query failures.
pub(crate) fn map_referencing_diesel_error<E, Q, U, F>(
    error: diesel::result::Error,
    query: Q,
    unavailable: U,
    foreign_key: F,
) -> E
where
    Q: Fn(&'static str) -> E,
    U: Fn(&'static str) -> E,
    F: FnOnce(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if matches!(
        &error,
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)
    ) {
        log_diesel_failure(&error);
        return foreign_key("referenced row does not exist");
    }

    map_basic_diesel_error(error, query, unavailable)
}
