//! Mutation notifications.
//!
//! With the `emitter` feature, listeners registered on a
//! [`ContactStore`](crate::ContactStore) receive a JSON payload after each
//! successful mutation has been written through. Payloads:
//!
//! - `ContactAdded`, `ContactUpdated`, `FavoriteToggled`: the contact record.
//! - `ContactDeleted`: `{"id": "..."}`.
//!
//! Misses (unknown ids) do not notify.

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactEvent {
    Added,
    Updated,
    Deleted,
    FavoriteToggled,
}

impl ContactEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            ContactEvent::Added => "ContactAdded",
            ContactEvent::Updated => "ContactUpdated",
            ContactEvent::Deleted => "ContactDeleted",
            ContactEvent::FavoriteToggled => "FavoriteToggled",
        }
    }
}

pub(crate) struct Notifier {
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self {
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        }
    }

    #[cfg(feature = "emitter")]
    pub(crate) fn on<F>(&mut self, event: ContactEvent, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event.name(), listener)
    }

    #[cfg(feature = "emitter")]
    pub(crate) fn remove_listener(&mut self, listener_id: &str) -> bool {
        self.emitter.remove_listener(listener_id).is_some()
    }

    /// Emit `event` and wait for every listener to finish, so the caller's
    /// mutation is complete (notifications included) when it returns.
    #[cfg(feature = "emitter")]
    pub(crate) fn emit(&mut self, event: ContactEvent, payload: impl FnOnce() -> Option<String>) {
        let Some(payload) = payload() else {
            log::warn!("dropping {} notification: payload did not serialize", event.name());
            return;
        };
        for handle in self.emitter.emit(event.name(), payload) {
            if handle.join().is_err() {
                log::warn!("{} listener panicked", event.name());
            }
        }
    }

    #[cfg(not(feature = "emitter"))]
    pub(crate) fn emit(&mut self, _event: ContactEvent, _payload: impl FnOnce() -> Option<String>) {}
}
