//! # Storage Layer
//!
//! The [`DataStore`] trait is the state container for notelog: an ordered sequence of
//! notes and a parallel ordered sequence of timestamps.
//!
//! ## Writes
//!
//! - [`DataStore::append_entry`] appends a note and its timestamp together. This is the
//!   write clients should use; it keeps both sequences the same length.
//! - [`DataStore::append_note`] and [`DataStore::append_timestamp`] append to one
//!   sequence each. Nothing ties two such calls together, so a caller that issues one
//!   without the other leaves the sequences misaligned. [`DataStore::alignment`]
//!   reports this.
//!
//! Every write is total: any text is accepted, empty text included.
//!
//! ## Reads
//!
//! Reads borrow the store's sequences directly. `note_count` is recomputed on every
//! call rather than cached.
//!
//! ## Observers
//!
//! Each write notifies the store's subscribers once, after the write has completed.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Notes live as long as the store.

use crate::model::{Alignment, Entry};

pub mod memory;
pub mod observer;

pub use observer::{StoreEvent, Subscriber, SubscriptionId};

/// Abstract interface for the note store.
pub trait DataStore {
    /// Append a note
    fn append_note(&mut self, text: String);

    /// Append a pre-formatted timestamp
    fn append_timestamp(&mut self, text: String);

    /// Append a note and its timestamp as one write
    fn append_entry(&mut self, text: String, timestamp: String);

    /// Notes in insertion order
    fn notes(&self) -> &[String];

    /// Timestamps in insertion order
    fn timestamps(&self) -> &[String];

    /// Register a callback invoked after every write
    fn subscribe(&mut self, callback: Subscriber) -> SubscriptionId;

    /// Remove a callback; returns `false` if it was not registered
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    fn note_count(&self) -> usize {
        self.notes().len()
    }

    /// Notes paired with timestamps by position
    fn entries(&self) -> Vec<Entry> {
        let timestamps = self.timestamps();
        self.notes()
            .iter()
            .enumerate()
            .map(|(i, note)| Entry::new(note.clone(), timestamps.get(i).cloned()))
            .collect()
    }

    fn alignment(&self) -> Alignment {
        Alignment {
            notes: self.notes().len(),
            timestamps: self.timestamps().len(),
        }
    }
}
