use crate::commands::{CmdMessage, CmdResult};
use crate::roster::WriterStore;
use crate::store::Persistence;

/// Persist after a mutation, downgrading a failed save to a warning: the
/// in-memory change is intact, it just may not survive a restart.
pub fn persist_or_warn<S: Persistence>(store: &mut WriterStore<S>, result: &mut CmdResult) {
    if let Err(e) = store.persist() {
        result.add_message(CmdMessage::warning(format!(
            "Change applied but not saved ({}); it may not survive a restart",
            e
        )));
    }
}
