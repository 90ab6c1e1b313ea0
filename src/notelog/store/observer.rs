//! Subscriptions to store writes.
//!
//! Everything runs on the caller's thread: `notify` invokes each callback in
//! subscription order before returning.

use std::fmt;

/// What a write just did. `index` is the 0-based position written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    NoteAppended { index: usize },
    TimestampAppended { index: usize },
    EntryAppended { index: usize },
}

pub type Subscriber = Box<dyn FnMut(&StoreEvent)>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct Observer {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        log::debug!("subscriber {} registered", id.0);
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != self.subscribers.len()
    }

    pub fn notify(&mut self, event: &StoreEvent) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<StoreEvent>>>, Subscriber) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let callback: Subscriber = Box::new(move |e: &StoreEvent| sink.borrow_mut().push(*e));
        (seen, callback)
    }

    #[test]
    fn notifies_every_subscriber() {
        let mut observer = Observer::new();
        let (a, cb_a) = recorder();
        let (b, cb_b) = recorder();
        observer.subscribe(cb_a);
        observer.subscribe(cb_b);

        observer.notify(&StoreEvent::NoteAppended { index: 0 });

        assert_eq!(*a.borrow(), vec![StoreEvent::NoteAppended { index: 0 }]);
        assert_eq!(*b.borrow(), vec![StoreEvent::NoteAppended { index: 0 }]);
    }

    #[test]
    fn notifies_in_subscription_order() {
        let mut observer = Observer::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = Rc::clone(&order);
            observer.subscribe(Box::new(move |_: &StoreEvent| {
                order.borrow_mut().push(n)
            }));
        }

        observer.notify(&StoreEvent::EntryAppended { index: 0 });

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribed_callback_is_not_called() {
        let mut observer = Observer::new();
        let (seen, cb) = recorder();
        let id = observer.subscribe(cb);

        assert!(observer.unsubscribe(id));
        observer.notify(&StoreEvent::TimestampAppended { index: 0 });

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_unknown_id_is_noop() {
        let mut observer = Observer::new();
        let (_seen, cb) = recorder();
        let id = observer.subscribe(cb);
        observer.unsubscribe(id);

        assert!(!observer.unsubscribe(id));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut observer = Observer::new();
        let first = observer.subscribe(Box::new(|_: &StoreEvent| {}));
        observer.unsubscribe(first);
        let second = observer.subscribe(Box::new(|_: &StoreEvent| {}));

        assert_ne!(first, second);
    }
}
