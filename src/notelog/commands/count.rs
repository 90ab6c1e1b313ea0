use crate::commands::CmdResult;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> CmdResult {
    CmdResult::default().with_note_count(store.note_count())
}
