use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::WriterStore;
use crate::store::Persistence;

use super::helpers::persist_or_warn;

pub fn run<S: Persistence>(
    store: &mut WriterStore<S>,
    id: &str,
    articles: u64,
    views: u64,
) -> Result<CmdResult> {
    let known = store.has_writer(id);
    store.set_stats(id, articles, views);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stats updated ({}): {} articles, {} views",
        id, articles, views
    )));
    if !known {
        result.add_message(CmdMessage::warning(format!(
            "No writer with id {}; stats recorded anyway",
            id
        )));
    }
    persist_or_warn(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::model::Stats;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn overwrites_existing_stats() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();

        run(&mut store, "1", 5, 100).unwrap();
        run(&mut store, "1", 2, 40).unwrap();

        assert_eq!(
            store.document().stats["1"],
            Stats {
                articles: 2,
                views: 40
            }
        );
    }

    #[test]
    fn unknown_id_is_recorded_with_a_warning() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        let result = run(&mut store, "9", 1, 10).unwrap();

        assert!(store.document().stats.contains_key("9"));
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)));
    }

    #[test]
    fn known_id_produces_no_warning() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();
        let result = run(&mut store, "1", 1, 10).unwrap();
        assert!(!result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)));
    }
}
