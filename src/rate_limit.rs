use dashmap::DashMap;
use std::time::{Duration, Instant};

// Sliding-window limiter - tracks request timestamps per client IP
pub struct RateLimiter {
    clients: DashMap<String, Vec<Instant>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            clients: DashMap::new(),
            max_requests,
            window,
        }
    }

    // Prune the identity's log to the trailing window, then check against the cap.
    // Does NOT record - rejected attempts must never consume a slot, and an
    // unknown identity allocates nothing until a request is actually recorded.
    pub fn admit(&self, identity: &str, now: Instant) -> bool {
        match self.clients.get_mut(identity) {
            Some(mut log) => {
                Self::prune(&mut log, now, self.window);
                log.len() < self.max_requests
            }
            None => true,
        }
    }

    // Record an accepted request
    pub fn record(&self, identity: &str, now: Instant) {
        let mut log = self.clients.entry(identity.to_string()).or_default();
        log.push(now);
    }

    // Admit + record under a single entry guard, so two concurrent requests
    // from the same identity can never both take the last slot
    pub fn try_acquire(&self, identity: &str) -> bool {
        let now = Instant::now();
        let mut log = self.clients.entry(identity.to_string()).or_default();
        Self::prune(&mut log, now, self.window);
        if log.len() >= self.max_requests {
            return false;
        }
        log.push(now);
        true
    }

    pub fn tracked_identities(&self) -> usize {
        self.clients.len()
    }

    fn prune(log: &mut Vec<Instant>, now: Instant, window: Duration) {
        log.retain(|&t| now.duration_since(t) < window);
    }
}
