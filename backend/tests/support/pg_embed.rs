//! Bootstrap helpers for the shared embedded PostgreSQL cluster.
//!
//! `pg-embed-setup-unpriv` defaults to `/var/tmp` for its installation and
//! data directories, which sandboxed test environments often cannot write.
//! When `PG_RUNTIME_DIR` or `PG_DATA_DIR` is missing, this module points
//! both at unique directories under the cargo target directory for the
//! duration of the bootstrap. Unique directories also mean a postmaster
//! that outlives one test binary never blocks the next one's bootstrap.
//!
//! `PG_PASSWORD` is pinned when unset: `postgresql_embedded` generates a
//! random password per bootstrap, but a pre-existing data directory keeps
//! the credentials it was initialised with, so every process touching it
//! must present the same value.
//!
//! Environment mutation is scoped through `env_lock` and serialised so
//! parallel tests cannot race it. Binary downloads can fail transiently,
//! so bootstrap retries network-looking errors with a doubling delay.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::ClusterHandle;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Maximum number of retry attempts for transient network errors.
const MAX_RETRIES: u32 = 3;

/// Base delay between retry attempts (doubles with each retry).
const RETRY_DELAY_MS: u64 = 500;

/// Password pinned for the lifetime of a data directory.
const STABLE_PASSWORD: &str = "wiki_embedded_test";

fn pg_embed_target_dir() -> PathBuf {
    if let Some(target_dir) = std::env::var_os("CARGO_TARGET_DIR") {
        return PathBuf::from(target_dir).join("pg-embed");
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("pg-embed")
}

fn create_unique_pg_embed_dirs() -> Result<(PathBuf, PathBuf), std::io::Error> {
    let unique = format!("bootstrap-{}-{}", std::process::id(), Uuid::new_v4());
    let base = pg_embed_target_dir().join(unique);
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");

    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;

    Ok((runtime_dir, data_dir))
}

/// Directory pair for this bootstrap.
///
/// Preset values win, but only as a pair: when either variable is missing,
/// both point at fresh unique directories so the cluster sees one
/// consistent layout.
fn resolve_pg_embed_dirs() -> Result<(String, String), String> {
    if let (Some(runtime_dir), Some(data_dir)) = (
        std::env::var_os("PG_RUNTIME_DIR"),
        std::env::var_os("PG_DATA_DIR"),
    ) {
        return Ok((
            runtime_dir.to_string_lossy().into_owned(),
            data_dir.to_string_lossy().into_owned(),
        ));
    }

    let (runtime_dir, data_dir) = create_unique_pg_embed_dirs().map_err(|err| err.to_string())?;
    Ok((
        runtime_dir.to_string_lossy().into_owned(),
        data_dir.to_string_lossy().into_owned(),
    ))
}

fn resolve_pg_password() -> String {
    std::env::var("PG_PASSWORD").unwrap_or_else(|_| STABLE_PASSWORD.to_string())
}

/// Returns true if the error message suggests a transient network issue.
fn is_transient_error(err: &str) -> bool {
    let transient_patterns = [
        "error decoding response body",
        "connection reset",
        "connection refused",
        "timeout",
        "timed out",
        "temporarily unavailable",
        "network unreachable",
        "dns error",
        "failed to lookup",
    ];

    let err_lower = err.to_lowercase();
    transient_patterns
        .iter()
        .any(|pattern| err_lower.contains(pattern))
}

/// Bootstraps the process-wide shared cluster, or returns the existing one.
///
/// The first call starts embedded PostgreSQL with workspace-backed
/// directories when the path variables are not already set; later calls in
/// the same process return the same handle. Retries up to [`MAX_RETRIES`]
/// times on transient network errors since embedded PostgreSQL binary
/// downloads can fail intermittently.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let _bootstrap_guard = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let (runtime_dir, data_dir) = resolve_pg_embed_dirs()?;
    let _env_guard = env_lock::lock_env([
        ("PG_RUNTIME_DIR", Some(runtime_dir)),
        ("PG_DATA_DIR", Some(data_dir)),
        ("PG_PASSWORD", Some(resolve_pg_password())),
    ]);

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt < MAX_RETRIES && is_transient_error(&last_error) {
                    let delay = Duration::from_millis(RETRY_DELAY_MS * (1 << attempt));
                    eprintln!(
                        "pg-embed: transient error on attempt {}/{}, retrying in {delay:?}: {last_error}",
                        attempt + 1,
                        MAX_RETRIES + 1,
                    );
                    std::thread::sleep(delay);
                } else {
                    break;
                }
            }
        }
    }

    Err(last_error)
}
