use super::DataStore;
use crate::error::{FuelogError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FuelogError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FuelogError::Io(e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic replace: temp file, then rename
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(FuelogError::Io)?;
        fs::rename(&tmp_file, self.path_for(key)).map_err(FuelogError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        assert_eq!(store.read("records").unwrap(), None);
    }

    #[test]
    fn write_creates_root_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("data");
        let mut store = FileStore::new(&root);

        store.write("records", "[]").unwrap();
        assert!(root.join("records.json").exists());
        assert_eq!(store.read("records").unwrap().as_deref(), Some("[]"));

        store.write("records", "[1]").unwrap();
        assert_eq!(store.read("records").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        store.write("records", "[]").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["records.json".to_string()]);
    }
}
