// ==========================
// tests/unit/rate_limit_tests.rs
// ==========================
//! Unit tests for failed-login lockout tracking
use backend_lib::auth::AuthRateLimiter;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

fn addr(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

#[test]
fn test_lockout_after_repeated_failures() {
    let limiter = AuthRateLimiter::new(3, Duration::from_secs(60));
    let ip = addr(1);

    assert!(!limiter.is_locked(ip));

    limiter.record_failure(ip);
    limiter.record_failure(ip);
    assert!(!limiter.is_locked(ip));

    limiter.record_failure(ip);
    assert!(limiter.is_locked(ip));
}

#[test]
fn test_success_clears_history() {
    let limiter = AuthRateLimiter::new(3, Duration::from_secs(60));
    let ip = addr(2);

    limiter.record_failure(ip);
    limiter.record_failure(ip);
    limiter.record_success(ip);

    // The counter restarted; two more failures stay under the threshold
    limiter.record_failure(ip);
    limiter.record_failure(ip);
    assert!(!limiter.is_locked(ip));
}

#[test]
fn test_addresses_are_tracked_independently() {
    let limiter = AuthRateLimiter::new(2, Duration::from_secs(60));

    limiter.record_failure(addr(3));
    limiter.record_failure(addr(3));

    assert!(limiter.is_locked(addr(3)));
    assert!(!limiter.is_locked(addr(4)));
}

#[test]
fn test_zero_duration_lockout_expires_immediately() {
    let limiter = AuthRateLimiter::new(1, Duration::from_secs(0));
    let ip = addr(5);

    limiter.record_failure(ip);
    assert!(!limiter.is_locked(ip));
}

#[test]
fn test_prune_keeps_active_lockouts() {
    let limiter = AuthRateLimiter::new(1, Duration::from_secs(60));
    let ip = addr(6);

    limiter.record_failure(ip);
    limiter.prune();

    assert!(limiter.is_locked(ip));
}
