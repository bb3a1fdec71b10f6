// Cache store module
// Persists the last scan as a plain text list, one absolute path per line

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::error::CleanerError;
use super::types::FileList;

/// File name of the cache inside the cache directory
pub const CACHE_FILE_NAME: &str = "thumbs_list";

/// Handler for the cached result of the last scan
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
    path: PathBuf,
}

impl CacheStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        let dir = cache_dir.into();
        let path = dir.join(CACHE_FILE_NAME);
        Self { dir, path }
    }

    /// Full path of the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write the list, replacing any previous cache.
    ///
    /// The list goes to a temp file in the cache directory first and is then
    /// renamed over the cache file, so an interrupted save never leaves a
    /// truncated list behind.
    pub fn save(&self, list: &FileList) -> Result<(), CleanerError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            CleanerError::from_io_error(e, "creating cache directory", Some(self.dir.clone()))
        })?;

        let write_err = |source: io::Error| CleanerError::CacheWriteError {
            path: self.path.clone(),
            source,
        };

        let temp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            for path in list.iter() {
                let bytes = path_to_bytes(path.as_os_str());
                if bytes.contains(&b'\n') {
                    return Err(write_err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("path contains a line break: {:?}", path),
                    )));
                }
                writer.write_all(&bytes).map_err(write_err)?;
                writer.write_all(b"\n").map_err(write_err)?;
            }
            writer.flush().map_err(write_err)?;
        }
        temp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Read the cached list. Blank lines are skipped.
    ///
    /// Paths are read back byte for byte, so names that are not valid UTF-8
    /// survive a save/load cycle on unix.
    pub fn load(&self) -> Result<FileList, CleanerError> {
        let file = fs::File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CleanerError::CacheNotFound {
                path: self.path.clone(),
            },
            _ => CleanerError::CacheReadError {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let mut list = FileList::new();
        for line in BufReader::new(file).split(b'\n') {
            let line = line.map_err(|e| CleanerError::CacheReadError {
                path: self.path.clone(),
                source: e,
            })?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            list.push(PathBuf::from(path_from_bytes(line)));
        }
        Ok(list)
    }

    /// Remove the cache file. A missing file is fine.
    pub fn clear(&self) -> Result<(), CleanerError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CleanerError::from_io_error(
                e,
                "removing cache file",
                Some(self.path.clone()),
            )),
        }
    }
}

#[cfg(unix)]
fn path_to_bytes(path: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn path_to_bytes(path: &OsStr) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}
