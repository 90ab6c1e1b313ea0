use serde::Serialize;

/// A note paired with the timestamp stored at the same position.
///
/// `timestamp` is `None` when fewer timestamps than notes have been appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub note: String,
    pub timestamp: Option<String>,
}

impl Entry {
    pub fn new(note: impl Into<String>, timestamp: Option<String>) -> Self {
        Self {
            note: note.into(),
            timestamp,
        }
    }
}

/// An entry together with its user-facing, 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: Entry,
}

/// Lengths of the two parallel sequences held by a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub notes: usize,
    pub timestamps: usize,
}

impl Alignment {
    pub fn is_aligned(&self) -> bool {
        self.notes == self.timestamps
    }
}
