use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::WriterStore;
use crate::store::Persistence;

use super::helpers::persist_or_warn;

pub fn run<S: Persistence>(store: &mut WriterStore<S>, name: &str) -> Result<CmdResult> {
    let id = store.add_writer(name);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Writer added ({}): {}",
        id, name
    )));
    result.new_id = Some(id);
    persist_or_warn(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{leaderboard, MessageLevel};
    use crate::store::memory::fixtures::SaveFailStore;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn added_writer_appears_with_zeroed_stats() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        let result = run(&mut store, "Ada").unwrap();
        assert_eq!(result.new_id.as_deref(), Some("1"));

        let listed = leaderboard::run(&store).unwrap();
        assert_eq!(listed.entries.len(), 1);
        assert_eq!(listed.entries[0].name, "Ada");
        assert_eq!(listed.entries[0].articles, 0);
        assert_eq!(listed.entries[0].views, 0);
        assert_eq!(listed.entries[0].avg_views, 0);
    }

    #[test]
    fn add_reuses_the_smallest_free_id() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        run(&mut store, "Ada").unwrap();
        run(&mut store, "Grace").unwrap();
        store.remove_writer("1");

        let result = run(&mut store, "Joan").unwrap();
        assert_eq!(result.new_id.as_deref(), Some("1"));
    }

    #[test]
    fn failed_save_becomes_a_warning_not_an_error() {
        let (mut store, _) = WriterStore::open(SaveFailStore::new()).unwrap();
        let result = run(&mut store, "Ada").unwrap();

        assert_eq!(store.document().writers.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)));
    }
}
