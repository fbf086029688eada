use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::collections::VecDeque;
use std::time::Duration;

/// How often a blocking wait re-checks its session buffer.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Per-session delivery of asynchronously produced responses. Payloads are
/// opaque JSON; sessions come into being on first push and live until
/// cleared or emptied.
///
/// The timeout contract for `wait_for_response` is three-way:
/// `Some(0)` checks once and returns immediately, `None` waits indefinitely,
/// `Some(t)` waits at most `t` seconds. Unknown sessions yield `None`,
/// never an error.
#[async_trait]
pub trait ResponseQueue: Send + Sync {
    fn push_response(&self, session_id: &str, response: Value);

    async fn wait_for_response(&self, session_id: &str, timeout: Option<f64>) -> Option<Value>;

    fn clear_session(&self, session_id: &str);
}

/// FIFO buffer per session; any number of undelivered responses.
///
/// Intended for a single waiter per session. Concurrent waiters race on the
/// poll: whichever observes a non-empty buffer first wins, no fairness
/// between them.
#[derive(Default)]
pub struct OrderedQueue {
    buffers: DashMap<String, VecDeque<Value>>,
}

impl OrderedQueue {
    pub fn new() -> OrderedQueue {
        OrderedQueue {
            buffers: DashMap::new(),
        }
    }

    /// Number of sessions currently holding buffer state.
    pub fn session_count(&self) -> usize {
        self.buffers.len()
    }

    fn try_pop(&self, session_id: &str) -> Option<Value> {
        let popped = self
            .buffers
            .get_mut(session_id)
            .and_then(|mut buffer| buffer.pop_front());
        // a drained session holds no state; drop its entry unless a
        // concurrent push refilled it
        if popped.is_some() {
            self.buffers
                .remove_if(session_id, |_, buffer| buffer.is_empty());
        }
        popped
    }

    async fn poll_until_available(&self, session_id: &str) -> Value {
        loop {
            if let Some(response) = self.try_pop(session_id) {
                return response;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl ResponseQueue for OrderedQueue {
    fn push_response(&self, session_id: &str, response: Value) {
        self.buffers
            .entry(session_id.to_string())
            .or_default()
            .push_back(response);
    }

    async fn wait_for_response(&self, session_id: &str, timeout: Option<f64>) -> Option<Value> {
        match timeout {
            // Non-blocking check. Negative or NaN timeouts behave like zero;
            // the value can come straight off a query string.
            Some(t) if t.is_nan() || t <= 0.0 => self.try_pop(session_id),
            Some(t) => {
                // oversized and infinite timeouts saturate instead of panicking
                let limit = Duration::try_from_secs_f64(t).unwrap_or(Duration::MAX);
                tokio::time::timeout(limit, self.poll_until_available(session_id))
                    .await
                    .ok()
            }
            None => Some(self.poll_until_available(session_id).await),
        }
    }

    fn clear_session(&self, session_id: &str) {
        self.buffers.remove(session_id);
    }
}

/// Single slot per session; a push always overwrites any unread value.
/// Simultaneous push and pop on the same session is last-write-wins.
#[derive(Default)]
pub struct FlipFlopQueue {
    slots: DashMap<String, Value>,
}

impl FlipFlopQueue {
    pub fn new() -> FlipFlopQueue {
        FlipFlopQueue {
            slots: DashMap::new(),
        }
    }
}

#[async_trait]
impl ResponseQueue for FlipFlopQueue {
    fn push_response(&self, session_id: &str, response: Value) {
        self.slots.insert(session_id.to_string(), response);
    }

    /// Always an immediate read-and-remove. The `timeout` argument is
    /// accepted for trait compatibility but deliberately ignored; existing
    /// callers depend on this never blocking, so honoring the documented
    /// wait would change observable behavior.
    async fn wait_for_response(&self, session_id: &str, _timeout: Option<f64>) -> Option<Value> {
        self.slots.remove(session_id).map(|(_, response)| response)
    }

    fn clear_session(&self, session_id: &str) {
        self.slots.remove(session_id);
    }
}
