//! Correlation identifiers that follow a request through the service.
//!
//! A [`TraceId`] is minted by the tracing middleware for every request and
//! parked in tokio task-local storage, so code deep inside a handler can pick
//! it up without threading a parameter through every call. Task-locals do not
//! cross `tokio::spawn` boundaries; wrap spawned work in [`TraceId::scope`]
//! to carry the identifier over.

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    /// Trace identifier for the request currently being served.
    static ACTIVE_TRACE: TraceId;
}

/// Request correlation identifier backed by a UUID.
///
/// # Examples
/// ```
/// use wiki_backend::domain::TraceId;
///
/// // Outside a request scope there is nothing to correlate with.
/// assert!(TraceId::current().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a fresh random identifier for an incoming request.
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, for callers that already have one.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The identifier in scope for the running task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        ACTIVE_TRACE.try_with(|id| *id).ok()
    }

    /// The wrapped UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Run `fut` with this identifier in scope.
    ///
    /// Scopes nest; the innermost identifier wins until its future completes.
    ///
    /// # Examples
    /// ```
    /// use uuid::Uuid;
    /// use wiki_backend::domain::TraceId;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let trace = TraceId::from_uuid(Uuid::nil());
    /// let seen = trace.scope(async { TraceId::current() }).await;
    /// assert_eq!(seen, Some(trace));
    /// # }
    /// ```
    pub async fn scope<F>(self, fut: F) -> F::Output
    where
        F: Future,
    {
        ACTIVE_TRACE.scope(self, fut).await
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
