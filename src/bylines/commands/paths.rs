use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::WriterStore;
use crate::store::Persistence;

pub fn run<S: Persistence>(store: &WriterStore<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.location() {
        Some(path) => result.store_path = Some(path),
        None => result.add_message(CmdMessage::info("Store is not backed by a file.")),
    }
    Ok(result)
}
