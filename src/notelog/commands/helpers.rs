use crate::model::DisplayEntry;
use crate::store::DataStore;

/// All entries with 1-based display indexes.
pub fn indexed_entries<S: DataStore>(store: &S) -> Vec<DisplayEntry> {
    store
        .entries()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            index: i + 1,
            entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn indexes_start_at_one() {
        let fixture = StoreFixture::new().with_entries(2);
        let indexed = indexed_entries(&fixture.store);

        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[1].index, 2);
        assert_eq!(indexed[1].entry.note, "Activity 2");
    }

    #[test]
    fn empty_store_has_no_entries() {
        let fixture = StoreFixture::new();
        assert!(indexed_entries(&fixture.store).is_empty());
    }
}
