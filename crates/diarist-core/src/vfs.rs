use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Create or truncate a file and write `contents` to it.
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;

    fn remove_file(&self, path: &Path) -> std::io::Result<()>;

    fn is_dir(&self, path: &Path) -> bool;

    fn exists(&self, path: &Path) -> bool;

    /// List the regular files directly inside `dir`.
    /// This is NOT a recursive search.
    ///
    /// Only a failure on `dir` itself is an error. Entries that cannot be
    /// inspected (dangling links, permission errors) are still listed, so
    /// the caller sees the failure when it opens that one file.
    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        std::fs::write(path, contents)
    }

    fn remove_file(&self, path: &Path) -> std::io::Result<()> {
        std::fs::remove_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let unreadable = err
                        .path()
                        .filter(|_| err.depth() > 0)
                        .map(Path::to_path_buf);
                    match unreadable {
                        Some(path) => {
                            log::warn!("cannot inspect {}: {err}", path.display());
                            files.push(path);
                            continue;
                        }
                        None => return Err(std::io::Error::from(err)),
                    }
                }
            };
            let path = entry.path();

            if path.is_file() {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }
}
