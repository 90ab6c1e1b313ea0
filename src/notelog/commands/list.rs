use crate::commands::CmdResult;
use crate::store::DataStore;

use super::helpers::indexed_entries;

pub fn run<S: DataStore>(store: &S) -> CmdResult {
    let entries = indexed_entries(store);
    let count = entries.len();
    CmdResult::default()
        .with_entries(entries)
        .with_note_count(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new()
            .with_entry("a", "t1")
            .with_entry("b", "t2")
            .with_entry("c", "t3");

        let result = run(&fixture.store);
        let notes: Vec<_> = result
            .entries
            .iter()
            .map(|de| de.entry.note.as_str())
            .collect();

        assert_eq!(notes, ["a", "b", "c"]);
        assert_eq!(result.note_count, Some(3));
    }

    #[test]
    fn lists_unstamped_notes() {
        let fixture = StoreFixture::new()
            .with_entry("a", "t1")
            .with_unstamped_note("b");

        let result = run(&fixture.store);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[1].entry.timestamp, None);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store);
        assert!(result.entries.is_empty());
        assert_eq!(result.note_count, Some(0));
    }
}
