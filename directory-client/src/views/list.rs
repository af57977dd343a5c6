/// Employee list with debounced search
///
/// Typing updates the search text immediately, but the fetch only goes out
/// once the text has been stable for the debounce period. Each keystroke
/// cancels the previously scheduled fetch.
///
/// Fetches that are already in flight cannot be recalled. Each fetch takes a
/// generation number and its result is applied only if no newer fetch has
/// started since, so a slow response for an old search never overwrites a
/// newer one.
///
/// # Example
///
/// ```no_run
/// use directory_client::gateway::LocalGateway;
/// use directory_client::views::{ListView, Notices};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example() {
/// let view = ListView::new(
///     Arc::new(LocalGateway::new()),
///     Arc::new(Notices::new()),
///     Duration::from_millis(500),
/// );
///
/// view.set_search("e").await;
/// let handle = view.set_search("eng").await; // cancels the "e" fetch
/// handle.await.ok();
///
/// println!("{} engineers", view.snapshot().await.employees.len());
/// # }
/// ```

use crate::gateway::EmployeeApi;
use crate::views::notice::Notices;
use directory_shared::models::employee::Employee;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// What the list currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub search: String,
    pub employees: Vec<Employee>,
    pub loading: bool,
}

/// Debounced, stale-safe employee list
#[derive(Clone)]
pub struct ListView {
    inner: Arc<ListInner>,
}

struct ListInner {
    api: Arc<dyn EmployeeApi>,
    notices: Arc<Notices>,
    debounce: Duration,
    state: Mutex<ListState>,
    pending: Mutex<Option<CancellationToken>>,
    generation: AtomicU64,
}

impl ListView {
    pub fn new(api: Arc<dyn EmployeeApi>, notices: Arc<Notices>, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(ListInner {
                api,
                notices,
                debounce,
                state: Mutex::new(ListState::default()),
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub async fn snapshot(&self) -> ListState {
        self.inner.state.lock().await.clone()
    }

    pub async fn search_text(&self) -> String {
        self.inner.state.lock().await.search.clone()
    }

    /// Finds a displayed employee by id
    pub async fn find(&self, id: uuid::Uuid) -> Option<Employee> {
        self.inner
            .state
            .lock()
            .await
            .employees
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
    }

    /// Records new search text and schedules a fetch after the quiet period
    ///
    /// Any fetch still waiting out its quiet period is cancelled. The returned
    /// handle completes once this call's fetch has finished or been
    /// cancelled.
    pub async fn set_search(&self, text: impl Into<String>) -> JoinHandle<()> {
        let text = text.into();
        self.inner.state.lock().await.search = text.clone();

        let token = CancellationToken::new();
        if let Some(previous) = self.inner.pending.lock().await.replace(token.clone()) {
            previous.cancel();
        }

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!(search = %text, "Search superseded before sending");
                }
                _ = sleep(inner.debounce) => {
                    inner.fetch(text).await;
                }
            }
        })
    }

    /// Fetches immediately using the current search text
    pub async fn refresh(&self) {
        let search = self.search_text().await;
        self.inner.fetch(search).await;
    }
}

impl ListInner {
    async fn fetch(&self, search: String) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().await.loading = true;

        let term = (!search.is_empty()).then_some(search.as_str());
        let result = self.api.list(term).await;

        // generation is checked while holding the state lock
        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(search = %search, generation, "Discarding stale list response");
            return;
        }
        state.loading = false;

        match result {
            Ok(employees) => {
                tracing::debug!(search = %search, count = employees.len(), "List refreshed");
                state.employees = employees;
            }
            Err(e) => {
                tracing::warn!(search = %search, error = %e, "Failed to fetch employees");
                self.notices.error(format!("Failed to fetch employees: {}", e));
            }
        }
    }
}
