use std::future::Future;
use std::time::Duration;

use finscreen_core::ScreenError;

/// Bound `fut` by an optional overall deadline.
///
/// On timeout the future is dropped, cancelling any in-flight page fetches,
/// and `RequestTimeout { operation }` is returned.
pub async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    operation: &'static str,
    fut: F,
) -> Result<T, ScreenError>
where
    F: Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| ScreenError::request_timeout(operation)),
        None => Ok(fut.await),
    }
}
