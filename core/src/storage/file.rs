// trolley/src/storage/file.rs

//! A file-per-key backend: each key maps to one JSON document under a root
//! directory. The native analog of browser local storage for desktop and
//! server-side embedders.

use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{TrolleyError, TrolleyResult};
use crate::storage::backend::StorageBackend;

pub struct FileBackend {
  root: PathBuf,
}

impl FileBackend {
  /// Opens (and if needed creates) the root directory.
  pub fn open<P: AsRef<Path>>(root: P) -> TrolleyResult<Self> {
    let root = root.as_ref().to_path_buf();
    fs::create_dir_all(&root).map_err(|e| TrolleyError::StorageWrite {
      key: root.display().to_string(),
      source: anyhow::Error::new(e).context("creating storage root directory"),
    })?;
    Ok(Self { root })
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self.root.join(format!("{}.json", key))
  }
}

impl StorageBackend for FileBackend {
  fn get(&self, key: &str) -> TrolleyResult<Option<String>> {
    match fs::read_to_string(self.path_for(key)) {
      Ok(contents) => Ok(Some(contents)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(TrolleyError::StorageRead {
        key: key.to_string(),
        source: anyhow::Error::new(e).context("reading key file"),
      }),
    }
  }

  fn put(&self, key: &str, value: &str) -> TrolleyResult<()> {
    let path = self.path_for(key);
    fs::write(&path, value)
      .with_context(|| format!("writing key file {}", path.display()))
      .map_err(|source| TrolleyError::StorageWrite {
        key: key.to_string(),
        source,
      })
  }

  fn remove(&self, key: &str) -> TrolleyResult<()> {
    match fs::remove_file(self.path_for(key)) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(TrolleyError::StorageWrite {
        key: key.to_string(),
        source: anyhow::Error::new(e).context("removing key file"),
      }),
    }
  }
}
