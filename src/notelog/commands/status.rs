use crate::commands::{CmdMessage, CmdResult};
use crate::store::DataStore;

/// Reports how many notes and timestamps the store holds, warning when they diverge.
pub fn run<S: DataStore>(store: &S) -> CmdResult {
    let alignment = store.alignment();
    let mut result = CmdResult::default()
        .with_alignment(alignment)
        .with_note_count(alignment.notes);

    if alignment.is_aligned() {
        result.add_message(CmdMessage::info(format!(
            "{} notes, {} timestamps",
            alignment.notes, alignment.timestamps
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Notes and timestamps are out of step: {} notes, {} timestamps",
            alignment.notes, alignment.timestamps
        )));
    }
    result
}
