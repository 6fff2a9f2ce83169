//! Correlated report requests over the fire-and-forget transport.
//!
//! The server only speaks publish/subscribe, so a report fetch is a pair of
//! one-way events tied together by a [`RequestId`]. The hub keeps one slot
//! per outstanding request; the response handler fulfills the slot and the
//! waiting task removes it, so no subscription outlives its request.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use blackjack_shared::{ReportData, ReportKind, RequestId};
use gloo_timers::future::TimeoutFuture;

use crate::error::ClientError;

/// Interval between slot checks while a request is outstanding.
pub const POLL_INTERVAL_MS: u32 = 100;
/// Hard upper bound on how long a request may stay outstanding.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Debug)]
enum Slot {
    Pending,
    Resolved(ReportData),
}

#[derive(Debug, Default)]
struct HubInner {
    next_id: u64,
    slots: HashMap<RequestId, Slot>,
}

/// One-shot response slots keyed by request id.
///
/// Clonable handle; the state store fulfills slots from inbound messages
/// while spawned await tasks poll and remove them.
#[derive(Clone, Debug, Default)]
pub struct ReportHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ReportHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh request id with an empty slot.
    pub fn begin(&self) -> RequestId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = RequestId(inner.next_id);
        inner.slots.insert(id, Slot::Pending);
        id
    }

    /// Resolve the slot for `id`. A response for an unknown or expired id
    /// is dropped, not re-dispatched.
    pub fn fulfill(&self, id: RequestId, data: ReportData) {
        let mut inner = self.inner.borrow_mut();
        match inner.slots.get_mut(&id) {
            Some(slot @ Slot::Pending) => *slot = Slot::Resolved(data),
            Some(Slot::Resolved(_)) => {
                tracing::warn!(?id, "duplicate report response dropped");
            }
            None => {
                tracing::warn!(?id, "late report response for unknown request dropped");
            }
        }
    }

    /// Remove the slot for `id` without resolving it.
    pub fn cancel(&self, id: RequestId) {
        self.inner.borrow_mut().slots.remove(&id);
    }

    /// Take the resolved payload for `id`, removing the slot. Returns
    /// `None` while the request is still outstanding.
    pub fn try_take(&self, id: RequestId) -> Option<ReportData> {
        let mut inner = self.inner.borrow_mut();
        match inner.slots.get(&id) {
            Some(Slot::Resolved(_)) => match inner.slots.remove(&id) {
                Some(Slot::Resolved(data)) => Some(data),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether `id` still has an unresolved slot.
    pub fn is_pending(&self, id: RequestId) -> bool {
        matches!(self.inner.borrow().slots.get(&id), Some(Slot::Pending))
    }
}

/// Suspend until the slot for `id` resolves, yielding between checks so
/// inbound events and user interaction keep processing. Gives up after
/// [`REQUEST_TIMEOUT_MS`] and removes the slot so nothing leaks.
pub async fn await_report(
    hub: ReportHub,
    kind: ReportKind,
    id: RequestId,
) -> Result<ReportData, ClientError> {
    let mut waited_ms = 0u32;
    loop {
        if let Some(data) = hub.try_take(id) {
            return Ok(data);
        }
        if waited_ms >= REQUEST_TIMEOUT_MS {
            hub.cancel(id);
            return Err(ClientError::RequestTimeout { kind });
        }
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
        waited_ms += POLL_INTERVAL_MS;
    }
}
