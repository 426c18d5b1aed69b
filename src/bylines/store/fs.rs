use super::Persistence;
use crate::error::{BylinesError, Result};
use crate::model::StoreDocument;
use std::fs;
use std::path::PathBuf;

pub const DATA_FILENAME: &str = "writer_stats.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(BylinesError::Io)?;
        }
        Ok(())
    }
}

impl Persistence for FileStore {
    fn load(&self) -> Result<Option<StoreDocument>> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(BylinesError::Io)?;
        let doc: StoreDocument =
            serde_json::from_str(&content).map_err(BylinesError::Serialization)?;
        Ok(Some(doc))
    }

    fn save(&mut self, doc: &StoreDocument) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(doc).map_err(BylinesError::Serialization)?;
        fs::write(self.data_file(), content).map_err(BylinesError::Io)?;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.data_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Stats, Writer};

    #[test]
    fn load_returns_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let mut doc = StoreDocument::default();
        doc.writers.push(Writer {
            id: "1".to_string(),
            name: "Ada".to_string(),
        });
        doc.stats.insert(
            "1".to_string(),
            Stats {
                articles: 3,
                views: 900,
            },
        );

        store.save(&doc).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeply").join("nested");
        let mut store = FileStore::new(nested.clone());

        store.save(&StoreDocument::default()).unwrap();
        assert!(nested.join(DATA_FILENAME).exists());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        std::fs::write(store.data_file(), "{not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(BylinesError::Serialization(_))
        ));
    }
}
