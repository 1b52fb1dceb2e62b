//! Timestamp-based identifiers.

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Next identifier derived from the wall clock.
///
/// Normally equal to the current millisecond. When two ids are requested in
/// the same millisecond (or the clock steps back) the previous id plus one is
/// returned, so ids are strictly increasing for the lifetime of the process.
pub fn next_timestamp_id() -> i64 {
    let now = now_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}
