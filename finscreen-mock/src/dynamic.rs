use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use url::Url;

use finscreen_core::{HttpResponse, HttpTransport, RATE_LIMIT_SENTINEL, ScreenError};

/// Instruction for how one request to a route should behave.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer immediately with this response.
    Respond(HttpResponse),
    /// Answer with this response after a delay.
    Delayed(Duration, HttpResponse),
    /// Fail immediately with the provided error.
    Fail(ScreenError),
    /// Hang indefinitely (simulate a stalled connection).
    Hang,
}

impl MockBehavior {
    /// A 200 response with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Respond(HttpResponse::ok(body))
    }

    /// A response with `status` and `body`.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Respond(HttpResponse::with_status(status, body))
    }

    /// A 200 response carrying the upstream soft rate-limit sentinel.
    #[must_use]
    pub fn rate_limited() -> Self {
        Self::ok(RATE_LIMIT_SENTINEL)
    }

    /// A 200 response with `body`, delivered after `delay`.
    pub fn delayed(delay: Duration, body: impl Into<String>) -> Self {
        Self::Delayed(delay, HttpResponse::ok(body))
    }
}

/// Which request a behavior applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MockRoute {
    /// Screener request without a row offset (page 1).
    FirstPage,
    /// Screener request starting at this row offset.
    Offset(usize),
    /// Quote page for this (upper-cased) ticker.
    Quote(String),
}

impl MockRoute {
    /// Route for a quote page.
    pub fn quote(ticker: impl AsRef<str>) -> Self {
        Self::Quote(ticker.as_ref().to_ascii_uppercase())
    }

    /// Classify a request URL.
    ///
    /// # Errors
    /// Returns `InvalidUrl` when the URL does not parse or hits an unknown path.
    pub fn of_url(url: &str) -> Result<Self, ScreenError> {
        let parsed = Url::parse(url).map_err(|e| ScreenError::invalid_url(url, e.to_string()))?;
        let param = |name: &str| {
            parsed
                .query_pairs()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.into_owned())
        };
        match parsed.path() {
            "/screener.ashx" => match param("r") {
                Some(r) => r
                    .parse()
                    .map(Self::Offset)
                    .map_err(|_| ScreenError::invalid_url(url, "non-numeric r")),
                None => Ok(Self::FirstPage),
            },
            "/quote.ashx" => Ok(Self::quote(param("t").unwrap_or_default())),
            other => Err(ScreenError::invalid_url(url, format!("unknown path {other}"))),
        }
    }
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<MockRoute, VecDeque<MockBehavior>>,
    requests: Vec<(MockRoute, String)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Answer every request to `route` with `behavior`.
    pub async fn set(&self, route: MockRoute, behavior: MockBehavior) {
        self.script(route, vec![behavior]).await;
    }

    /// Answer successive requests to `route` with `behaviors` in order; the last
    /// behavior repeats once the script is exhausted.
    pub async fn script(&self, route: MockRoute, behaviors: Vec<MockBehavior>) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(route, behaviors.into());
    }

    /// Append one behavior to the script for `route`.
    pub async fn push(&self, route: MockRoute, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.entry(route).or_default().push_back(behavior);
    }

    /// Every requested URL, in arrival order.
    pub async fn requests(&self) -> Vec<String> {
        let guard = self.state.lock().await;
        guard.requests.iter().map(|(_, u)| u.clone()).collect()
    }

    /// Number of requests that hit `route`.
    pub async fn hits(&self, route: &MockRoute) -> usize {
        let guard = self.state.lock().await;
        guard.requests.iter().filter(|(r, _)| r == route).count()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A transport that defers all behavior to an external controller.
///
/// Unscripted routes answer `404`.
pub struct DynamicMockTransport {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockTransport {
    /// Create a new dynamic mock transport and its controller.
    #[must_use]
    pub fn new_with_controller() -> (Arc<dyn HttpTransport>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { state });
        (me as Arc<dyn HttpTransport>, controller)
    }
}

#[async_trait]
impl HttpTransport for DynamicMockTransport {
    fn name(&self) -> &'static str {
        "dynamic-mock"
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, ScreenError> {
        let route = MockRoute::of_url(url)?;
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push((route.clone(), url.to_string()));
            guard.rules.get_mut(&route).and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            })
        };

        match behavior {
            None => Ok(HttpResponse::with_status(
                404,
                format!("no mock behavior for {url}"),
            )),
            Some(MockBehavior::Respond(resp)) => Ok(resp),
            Some(MockBehavior::Delayed(delay, resp)) => {
                tokio::time::sleep(delay).await;
                Ok(resp)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
        }
    }
}
