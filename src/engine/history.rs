// src/engine/history.rs

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::{DeskName, TicketId};

/// Default number of calls kept for the display panel.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Immutable snapshot of a ticket being called to a desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub ticket: TicketId,
    pub desk: DeskName,
    pub attendant: String,
    pub is_priority: bool,
    pub timestamp: DateTime<Utc>,
}

impl CallRecord {
    /// The sentence read out by the display panel.
    pub fn announcement(&self) -> String {
        format!(
            "Calling ticket {}, desk {}, attendant {}",
            self.ticket, self.desk, self.attendant
        )
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ticket {} -> {} ({}){}",
            self.timestamp.format("%H:%M:%S"),
            self.ticket,
            self.desk,
            self.attendant,
            if self.is_priority { " [priority]" } else { "" }
        )
    }
}

/// Most-recent-first list of calls, bounded to `limit` entries.
///
/// `limit` is clamped to at least 1; once full, recording a call evicts the
/// oldest entry.
#[derive(Debug)]
pub struct CallHistory {
    limit: usize,
    calls: VecDeque<CallRecord>,
}

impl CallHistory {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            calls: VecDeque::with_capacity(limit),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The most recent call, if any.
    pub fn latest(&self) -> Option<&CallRecord> {
        self.calls.front()
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CallRecord> {
        self.calls.iter()
    }

    pub fn record(&mut self, call: CallRecord) {
        self.calls.push_front(call);
        if self.calls.len() > self.limit {
            debug!(
                len = self.calls.len(),
                limit = self.limit,
                "call history full; evicting oldest"
            );
            self.calls.truncate(self.limit);
        }
    }
}

impl Default for CallHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
