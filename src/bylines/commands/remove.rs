use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::WriterStore;
use crate::store::Persistence;

use super::helpers::persist_or_warn;

pub fn run<S: Persistence>(store: &mut WriterStore<S>, id: &str) -> Result<CmdResult> {
    let removed = store.remove_writer(id);
    let mut result = CmdResult::default();
    if removed {
        result.add_message(CmdMessage::success(format!("Writer removed ({})", id)));
    } else {
        result.add_message(CmdMessage::info(format!(
            "No writer with id {}; nothing to do",
            id
        )));
    }
    persist_or_warn(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_writer_and_stats() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();

        run(&mut store, "1").unwrap();
        assert!(store.document().writers.is_empty());
        assert!(store.document().stats.is_empty());
    }

    #[test]
    fn unknown_id_is_a_successful_noop() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();
        let before = store.document().clone();

        let result = run(&mut store, "42").unwrap();
        assert_eq!(store.document(), &before);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn removing_twice_is_idempotent() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();

        run(&mut store, "1").unwrap();
        run(&mut store, "1").unwrap();
        assert!(store.document().writers.is_empty());
    }
}
