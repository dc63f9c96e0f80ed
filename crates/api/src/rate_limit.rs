use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Sliding-window request counter keyed by client address.
#[derive(Debug, Clone)]
pub struct ClientRateLimiter {
    inner: Arc<Mutex<Buckets>>,
    window: Duration,
    max_requests: usize,
}

#[derive(Debug)]
struct Buckets {
    hits: HashMap<String, VecDeque<Instant>>,
    last_sweep: Instant,
}

impl ClientRateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Buckets {
                hits: HashMap::new(),
                last_sweep: Instant::now(),
            })),
            window,
            max_requests: max_requests.max(1),
        }
    }

    pub fn allow(&self, client: &str) -> bool {
        self.allow_at(client, Instant::now())
    }

    pub fn tracked_clients(&self) -> usize {
        self.inner.lock().hits.len()
    }

    fn allow_at(&self, client: &str, now: Instant) -> bool {
        let mut buckets = self.inner.lock();

        // At most one full sweep per window keeps the map bounded by active clients.
        if now.saturating_duration_since(buckets.last_sweep) >= self.window {
            let window = self.window;
            buckets.hits.retain(|_, recent| {
                recent
                    .back()
                    .is_some_and(|last| now.saturating_duration_since(*last) <= window)
            });
            buckets.last_sweep = now;
        }

        let recent = buckets.hits.entry(client.to_string()).or_default();

        while recent
            .front()
            .is_some_and(|seen| now.saturating_duration_since(*seen) > self.window)
        {
            recent.pop_front();
        }

        if recent.len() >= self.max_requests {
            return false;
        }

        recent.push_back(now);
        true
    }
}
