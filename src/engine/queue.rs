// src/engine/queue.rs

use std::collections::VecDeque;

use tracing::debug;

use crate::types::TicketId;

/// Which line a ticket waits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    Normal,
    Priority,
}

impl TicketKind {
    pub fn is_priority(self) -> bool {
        matches!(self, TicketKind::Priority)
    }
}

/// The two waiting lines: priority and normal.
///
/// Semantics:
/// - Each line is FIFO; insertion order is call order.
/// - A ticket sits in exactly one line until it is popped.
/// - [`pop_next`](Self::pop_next) drains the priority line completely before
///   it ever looks at the normal line. This is a property of the pop itself,
///   not a filter applied by callers.
#[derive(Debug, Default)]
pub struct TicketQueues {
    priority: VecDeque<TicketId>,
    normal: VecDeque<TicketId>,
}

impl TicketQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if both lines are empty.
    pub fn is_empty(&self) -> bool {
        self.priority.is_empty() && self.normal.is_empty()
    }

    /// Total number of waiting tickets.
    pub fn len(&self) -> usize {
        self.priority.len() + self.normal.len()
    }

    pub fn priority(&self) -> &VecDeque<TicketId> {
        &self.priority
    }

    pub fn normal(&self) -> &VecDeque<TicketId> {
        &self.normal
    }

    /// Append a freshly issued ticket to the back of its line.
    pub fn enqueue(&mut self, ticket: TicketId, kind: TicketKind) {
        match kind {
            TicketKind::Priority => self.priority.push_back(ticket),
            TicketKind::Normal => self.normal.push_back(ticket),
        }
        debug!(
            %ticket,
            ?kind,
            priority_len = self.priority.len(),
            normal_len = self.normal.len(),
            "ticket enqueued"
        );
    }

    /// Remove and return the next ticket to call, with the line it came from.
    ///
    /// Returns `None` (and changes nothing) when both lines are empty.
    pub fn pop_next(&mut self) -> Option<(TicketId, TicketKind)> {
        if let Some(ticket) = self.priority.pop_front() {
            return Some((ticket, TicketKind::Priority));
        }
        self.normal
            .pop_front()
            .map(|ticket| (ticket, TicketKind::Normal))
    }

    /// Whether `ticket` is still waiting in either line.
    pub fn contains(&self, ticket: TicketId) -> bool {
        self.priority.contains(&ticket) || self.normal.contains(&ticket)
    }
}
