use std::collections::BTreeMap;

use tokio::sync::broadcast;

use crate::errors::{HeraldError, HeraldErrorKind};
use crate::event::NotificationEventArgs;
use crate::herald_err;
use crate::history::EventHistory;

struct Pending {
    serial: u64,
    event: NotificationEventArgs,
}

/// Events currently on screen plus a bounded history of dismissed ones.
pub struct EventStore {
    last_id: u32,
    serial: u64,
    pending: BTreeMap<u32, Pending>,
    history: EventHistory<NotificationEventArgs>,
    sender: broadcast::Sender<u32>,
}
impl EventStore {
    pub fn new(history_capacity: usize, sender: broadcast::Sender<u32>) -> Self {
        Self {
            last_id: 0,
            serial: 0,
            pending: BTreeMap::new(),
            history: EventHistory::new(history_capacity),
            sender,
        }
    }

    /// Id for an incoming call: `replaces_id` when that event is still
    /// pending, otherwise a fresh id that no pending event holds.
    pub fn assign_id(&mut self, replaces_id: u32) -> u32 {
        if replaces_id != 0 && self.pending.contains_key(&replaces_id) {
            return replaces_id;
        }
        loop {
            self.last_id = self.last_id.wrapping_add(1).max(1);
            if !self.pending.contains_key(&self.last_id) {
                return self.last_id;
            }
        }
    }

    /// Stores `event`, replacing any pending event with the same id, and
    /// announces it to subscribers. Returns the insertion serial used by
    /// [`EventStore::expire`].
    pub fn insert(&mut self, event: NotificationEventArgs) -> u64 {
        self.serial += 1;
        let id = event.unique_number();
        self.pending.insert(
            id,
            Pending {
                serial: self.serial,
                event,
            },
        );
        // No subscribers is fine
        let _ = self.sender.send(id);
        self.serial
    }

    pub fn get(&self, id: u32) -> Option<&NotificationEventArgs> {
        self.pending
            .get(&id)
            .map(|p| &p.event)
            .or_else(|| self.history.find(|e| e.unique_number() == id))
    }

    pub fn is_pending(&self, id: u32) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending(&self) -> Vec<NotificationEventArgs> {
        self.pending.values().map(|p| p.event.clone()).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn dismiss(&mut self, id: u32) -> Result<NotificationEventArgs, HeraldError> {
        let Pending { event, .. } = self
            .pending
            .remove(&id)
            .ok_or_else(|| herald_err!(HeraldErrorKind::UnknownEvent, "no pending event {}", id))?;
        self.archive(event.clone());
        Ok(event)
    }

    /// Dismisses `id` only if it was not replaced since insertion `serial`.
    pub fn expire(&mut self, id: u32, serial: u64) -> Option<NotificationEventArgs> {
        if self.pending.get(&id)?.serial != serial {
            return None;
        }
        self.dismiss(id).ok()
    }

    fn archive(&mut self, event: NotificationEventArgs) {
        let id = event.unique_number();
        self.history.remove_where(|e| e.unique_number() == id);
        self.history.push(event);
    }
}
