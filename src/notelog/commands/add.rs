use crate::commands::CmdResult;
use crate::store::DataStore;

/// Logs `note` stamped with the already formatted `timestamp`.
pub fn run<S: DataStore>(store: &mut S, note: String, timestamp: String) -> CmdResult {
    store.append_entry(note, timestamp);
    CmdResult::default().with_note_count(store.note_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn logs_note_and_timestamp_together() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            "buy milk".into(),
            "2024-01-01 10:00:00".into(),
        );

        assert_eq!(result.note_count, Some(1));
        assert!(result.messages.is_empty());
        assert_eq!(store.notes(), ["buy milk"]);
        assert_eq!(store.timestamps(), ["2024-01-01 10:00:00"]);
    }

    #[test]
    fn empty_note_is_logged() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, String::new(), "t".into());

        assert_eq!(result.note_count, Some(1));
        assert_eq!(store.notes(), [""]);
    }

    #[test]
    fn same_note_twice_yields_two_entries() {
        let mut store = InMemoryStore::new();
        run(&mut store, "x".into(), "t1".into());
        let result = run(&mut store, "x".into(), "t2".into());

        assert_eq!(result.note_count, Some(2));
        assert_eq!(store.notes(), ["x", "x"]);
        assert!(store.alignment().is_aligned());
    }
}
