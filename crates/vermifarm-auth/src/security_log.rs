//! Bounded security-event log.

use std::collections::VecDeque;
use std::sync::Mutex;
use vermifarm_commons::{SecurityEvent, SecurityEventKind};

/// Append-only ring buffer of security events.
///
/// Bounded to `capacity` entries; once full, the oldest entry is dropped for
/// each new one. Never persisted.
pub struct SecurityLog {
    capacity: usize,
    events: Mutex<VecDeque<SecurityEvent>>,
}

impl SecurityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            events: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append an event, evicting the oldest entry when at capacity.
    pub fn record(&self, event: SecurityEvent) {
        log::debug!(
            "security event: {} user={:?} ip={:?}",
            event.kind.as_str(),
            event.user_id,
            event.ip_address
        );
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Most recent events, newest first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Vec<SecurityEvent> {
        let events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.iter().rev().take(limit).cloned().collect()
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        match self.events.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count of retained events of one kind (test/diagnostic helper).
    pub fn count_of(&self, kind: SecurityEventKind) -> usize {
        let events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.iter().filter(|e| e.kind == kind).count()
    }
}
