use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::store::kv::KeyValueStore;

/// One JSON file per key under a data directory. Writes land in a `.tmp`
/// sibling and are renamed into place, so readers never see half a file.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", sanitize_key(key)))
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("verbdrill")
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.file_path(key);
        let tmp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_key_is_none() {
        let (_dir, store) = make_test_store();
        assert_eq!(store.get("verb_stats").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, store) = make_test_store();
        store.set("verb_stats", r#"{"go":{"correct":1,"wrong":0}}"#).unwrap();
        assert_eq!(
            store.get("verb_stats").unwrap().as_deref(),
            Some(r#"{"go":{"correct":1,"wrong":0}}"#)
        );
        assert!(store.file_path("verb_stats").exists());
    }

    #[test]
    fn test_set_overwrites_and_leaves_no_tmp() {
        let (dir, store) = make_test_store();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));

        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn test_keys_are_sanitized() {
        assert_eq!(sanitize_key("verb_stats"), "verb_stats");
        assert_eq!(sanitize_key("../etc/passwd"), ".._etc_passwd");
        let (_dir, store) = make_test_store();
        store.set("a/b", "v").unwrap();
        assert!(store.base_dir().join("a_b.json").exists());
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let store = FileStore {
            base_dir: dir.path().join("nonexistent_subdir"),
        };
        assert!(store.set("k", "v").is_err());
    }
}
