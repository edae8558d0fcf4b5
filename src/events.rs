//! Change notification for view consumers.
//!
//! Views read shared state synchronously each frame; subscriptions exist
//! for consumers that want to react to individual transitions instead of
//! polling. All callbacks run on the single dashboard thread.

use std::fmt;

/// A state transition worth notifying consumers about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeEvent {
    /// The displayed year changed (scrub or playback advance).
    YearChanged(i32),
    /// Playback started or stopped.
    PlaybackChanged(bool),
    /// Playback speed changed.
    SpeedChanged(f64),
    /// The active dataset was loaded, replaced, or reset.
    DatasetChanged,
}

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ChangeEvent)>;

/// Registry of change callbacks.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Subscribers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; the returned id unsubscribes it.
    pub fn subscribe(&mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> SubscriptionId {
        self.next_id += 1;
        self.entries.push((self.next_id, Box::new(callback)));
        SubscriptionId(self.next_id)
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id.0);
        self.entries.len() != before
    }

    /// Invoke every callback with the event.
    pub fn emit(&mut self, event: &ChangeEvent) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribe_emit_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let sink = Rc::clone(&seen);
        let id = subscribers.subscribe(move |event| sink.borrow_mut().push(*event));

        subscribers.emit(&ChangeEvent::YearChanged(1950));
        assert_eq!(seen.borrow().as_slice(), &[ChangeEvent::YearChanged(1950)]);

        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        subscribers.emit(&ChangeEvent::DatasetChanged);
        assert_eq!(seen.borrow().len(), 1);
    }
}
