// ============================
// crates/backend-lib/src/auth/rate_limit.rs
// ============================
//! Lockout tracking for failed login attempts.

use dashmap::DashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Failure history for a single client address
#[derive(Debug, Clone)]
struct FailureRecord {
    /// Consecutive failed logins since the last success
    failures: u32,
    /// Time of the most recent failure
    last_failure: Instant,
    /// End of the active lockout, if one is in force
    locked_until: Option<Instant>,
}

/// Tracks failed logins per client address and locks out repeat offenders.
/// A successful login clears the address's history.
#[derive(Debug, Clone)]
pub struct AuthRateLimiter {
    records: Arc<DashMap<IpAddr, FailureRecord>>,
    max_failures: u32,
    lockout: Duration,
}

impl AuthRateLimiter {
    pub fn new(max_failures: u32, lockout: Duration) -> Self {
        Self {
            records: Arc::new(DashMap::new()),
            max_failures,
            lockout,
        }
    }

    /// Is this address currently locked out?
    pub fn is_locked(&self, addr: IpAddr) -> bool {
        self.records
            .get(&addr)
            .and_then(|r| r.locked_until)
            .is_some_and(|until| Instant::now() < until)
    }

    /// Record a failed login; starts a lockout once the threshold is reached
    pub fn record_failure(&self, addr: IpAddr) {
        let now = Instant::now();

        let mut record = self.records.entry(addr).or_insert_with(|| FailureRecord {
            failures: 0,
            last_failure: now,
            locked_until: None,
        });

        // An expired lockout means the slate is clean
        if record.locked_until.is_some_and(|until| now >= until) {
            record.failures = 0;
            record.locked_until = None;
        }

        record.failures += 1;
        record.last_failure = now;

        if record.failures >= self.max_failures {
            record.locked_until = Some(now + self.lockout);
            tracing::warn!(%addr, failures = record.failures, "login lockout started");
        }
    }

    /// Record a successful login, clearing the address's failure history
    pub fn record_success(&self, addr: IpAddr) {
        self.records.remove(&addr);
    }

    /// Drop stale records: expired lockouts and failures older than a day
    pub fn prune(&self) {
        let now = Instant::now();

        self.records.retain(|_, record| {
            if let Some(until) = record.locked_until {
                return now < until;
            }
            now.duration_since(record.last_failure) < Duration::from_secs(24 * 60 * 60)
        });
    }
}
