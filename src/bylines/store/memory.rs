use super::Persistence;
use crate::error::Result;
use crate::model::StoreDocument;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    doc: Option<StoreDocument>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: StoreDocument) -> Self {
        Self { doc: Some(doc) }
    }

    /// Peek at the last saved document
    pub fn saved(&self) -> Option<&StoreDocument> {
        self.doc.as_ref()
    }
}

impl Persistence for InMemoryStore {
    fn load(&self) -> Result<Option<StoreDocument>> {
        Ok(self.doc.clone())
    }

    fn save(&mut self, doc: &StoreDocument) -> Result<()> {
        self.doc = Some(doc.clone());
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::BylinesError;
    use crate::model::{Stats, Writer};

    /// Backend whose saves always fail; loads still work. Used to test the
    /// "mutation survives in memory, save failure becomes a warning" path.
    #[derive(Default)]
    pub struct SaveFailStore {
        doc: Option<StoreDocument>,
    }

    impl SaveFailStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_document(doc: StoreDocument) -> Self {
            Self { doc: Some(doc) }
        }
    }

    impl Persistence for SaveFailStore {
        fn load(&self) -> Result<Option<StoreDocument>> {
            Ok(self.doc.clone())
        }

        fn save(&mut self, _doc: &StoreDocument) -> Result<()> {
            Err(BylinesError::Store("save rejected by fixture".to_string()))
        }

        fn location(&self) -> Option<PathBuf> {
            None
        }
    }

    /// Build a document from `(id, name, articles, views)` rows.
    pub fn document(rows: &[(&str, &str, u64, u64)]) -> StoreDocument {
        let mut doc = StoreDocument::default();
        for &(id, name, articles, views) in rows {
            doc.writers.push(Writer {
                id: id.to_string(),
                name: name.to_string(),
            });
            doc.stats
                .insert(id.to_string(), Stats { articles, views });
        }
        doc
    }
}
