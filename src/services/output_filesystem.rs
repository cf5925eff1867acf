use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::ports::OutputStore;

/// Hex SHA-256 digest of a content buffer.
pub fn hex_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hasher.finalize().iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Filesystem-backed output store.
#[derive(Debug, Clone)]
pub struct FilesystemOutputStore {
    root: PathBuf,
}

impl FilesystemOutputStore {
    /// Create a store over an existing root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Open the store rooted at `root` under the current directory,
    /// creating the root if it does not exist yet.
    pub fn open(root: &str) -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        let root = cwd.join(root);
        fs::create_dir_all(&root)?;
        Ok(Self::new(root))
    }
}

impl OutputStore for FilesystemOutputStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &str) -> Result<String, AppError> {
        let target = self.resolve(path);
        if !target.is_file() {
            return Err(AppError::FileNotFound(path.to_string()));
        }
        Ok(fs::read_to_string(target)?)
    }

    fn write(&self, path: &str, content: &str) -> Result<(), AppError> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        Ok(())
    }

    fn content_digest(&self, path: &str) -> Result<String, AppError> {
        let target = self.resolve(path);
        if !target.is_file() {
            return Err(AppError::FileNotFound(path.to_string()));
        }
        Ok(hex_digest(&fs::read(target)?))
    }

    fn create_dirs(&self, path: &str) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve(path))?;
        Ok(())
    }

    fn list_files(&self) -> Result<Vec<String>, AppError> {
        let mut files = Vec::new();
        collect_files(&self.root, &self.root, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<String>) -> Result<(), AppError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            files.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(())
}
