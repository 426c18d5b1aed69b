use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::WriterStore;
use crate::store::Persistence;

use super::helpers::persist_or_warn;

pub fn run<S: Persistence>(store: &mut WriterStore<S>) -> Result<CmdResult> {
    let remapped = store.repair();
    let mut result = CmdResult::default();

    if remapped == 0 {
        result.add_message(CmdMessage::success("No inconsistencies found."));
    } else {
        result.add_message(CmdMessage::warning("Inconsistencies found and fixed:"));
        result.add_message(CmdMessage::info(format!(
            "  - Remapped {} writer id(s) to the canonical sequence.",
            remapped
        )));
        persist_or_warn(store, &mut result);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, remove};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn healthy_store_reports_nothing_to_fix() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("No inconsistencies"));
    }

    #[test]
    fn recompacts_ids_left_sparse_by_deletion() {
        let (mut store, _) = WriterStore::open(InMemoryStore::new()).unwrap();
        add::run(&mut store, "Ada").unwrap();
        add::run(&mut store, "Grace").unwrap();
        add::run(&mut store, "Joan").unwrap();
        remove::run(&mut store, "1").unwrap();

        run(&mut store).unwrap();
        let ids: Vec<&str> = store
            .document()
            .writers
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2"]);
        // Grace kept her stats under the new id
        assert_eq!(store.document().writers[0].name, "Grace");
    }
}
