use crate::error::StoreError;
use crate::serialiser;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// The filesystem operations the converter needs, scoped to one directory.
pub trait Store {
    /// Names of the regular files in the directory, sorted.
    fn list(&self) -> Result<Vec<String>, StoreError>;
    fn read_lines(&self, name: &str) -> Result<Vec<String>, StoreError>;
    fn write_lines(&self, name: &str, lines: &[String]) -> Result<(), StoreError>;
}

pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Store for DirStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        let list_err = |source| StoreError::ListDir {
            path: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for dir_entry in fs::read_dir(&self.root).map_err(list_err)? {
            let dir_entry = dir_entry.map_err(list_err)?;
            if !dir_entry.file_type().map_err(list_err)?.is_file() {
                continue;
            }
            match dir_entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => debug!("Skipping non UTF-8 file name {:?}", name),
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_lines(&self, name: &str) -> Result<Vec<String>, StoreError> {
        let path = self.path(name);
        let bytes = fs::read(&path).map_err(|source| StoreError::Open { path, source })?;
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(String::from)
            .collect())
    }

    fn write_lines(&self, name: &str, lines: &[String]) -> Result<(), StoreError> {
        let path = self.path(name);
        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(source) => return Err(StoreError::Create { path, source }),
        };
        let mut writer = BufWriter::new(file);
        serialiser::write_lines(&mut writer, lines)
            .and_then(|_| writer.flush())
            .map_err(|source| StoreError::Write { path, source })
    }
}
