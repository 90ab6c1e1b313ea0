use super::observer::{Observer, StoreEvent, Subscriber, SubscriptionId};
use super::DataStore;

/// In-memory note store. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: Vec<String>,
    timestamps: Vec<String>,
    observer: Observer,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn append_note(&mut self, text: String) {
        self.notes.push(text);
        let index = self.notes.len() - 1;
        log::debug!("note appended at {}", index);
        self.observer.notify(&StoreEvent::NoteAppended { index });
    }

    fn append_timestamp(&mut self, text: String) {
        self.timestamps.push(text);
        let index = self.timestamps.len() - 1;
        log::debug!("timestamp appended at {}", index);
        self.observer.notify(&StoreEvent::TimestampAppended { index });
    }

    fn append_entry(&mut self, text: String, timestamp: String) {
        if self.notes.len() != self.timestamps.len() {
            log::warn!(
                "appending entry to misaligned store ({} notes, {} timestamps)",
                self.notes.len(),
                self.timestamps.len()
            );
        }
        self.notes.push(text);
        self.timestamps.push(timestamp);
        let index = self.notes.len() - 1;
        log::debug!("entry appended at {}", index);
        self.observer.notify(&StoreEvent::EntryAppended { index });
    }

    fn notes(&self) -> &[String] {
        &self.notes
    }

    fn timestamps(&self) -> &[String] {
        &self.timestamps
    }

    fn subscribe(&mut self, callback: Subscriber) -> SubscriptionId {
        self.observer.subscribe(callback)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observer.unsubscribe(id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = format!("Activity {}", i + 1);
                let timestamp = format!("2024-01-01 10:{:02}:00", i);
                self.store.append_entry(note, timestamp);
            }
            self
        }

        pub fn with_entry(mut self, note: &str, timestamp: &str) -> Self {
            self.store.append_entry(note.to_string(), timestamp.to_string());
            self
        }

        /// A note without a matching timestamp
        pub fn with_unstamped_note(mut self, note: &str) -> Self {
            self.store.append_note(note.to_string());
            self
        }
    }
}
