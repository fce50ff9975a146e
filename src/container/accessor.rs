//! Container Accessor
//!
//! Owns the library path and hands out file handles.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

use super::{LIB_FOOTER, LIB_HEADER, RECORD_SEPARATOR};

/// Access to the library file and its directory
///
/// The directory is created by `ensure_directory()`; the file itself is
/// only created by the first write (`create_with()`).
#[derive(Debug, Clone)]
pub struct ContainerAccessor {
    /// Directory holding the library file
    root: PathBuf,
    /// Full path of the library file
    path: PathBuf,
}

impl ContainerAccessor {
    /// Create an accessor for the library described by `config`
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.lib_root().to_path_buf(),
            path: config.library_path(),
        }
    }

    /// Create the library directory if missing
    ///
    /// Returns `true` when the directory had to be created.
    pub fn ensure_directory(&self) -> Result<bool> {
        if self.root.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.root)?;
        Ok(true)
    }

    /// Whether the library file exists yet
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Path of the library file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the library file for sequential line scanning
    pub fn open_read(&self) -> Result<BufReader<File>> {
        Ok(BufReader::new(File::open(&self.path)?))
    }

    /// Open the library file for in-place mutation
    pub fn open_rw(&self) -> Result<ContainerFile> {
        let file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        Ok(ContainerFile { file })
    }

    /// Create the library file holding a single record
    ///
    /// Writes `header || payload || "\n" || footer` in one buffer. Fails
    /// if the file already exists.
    pub fn create_with(&self, payload: &[u8]) -> Result<()> {
        let mut contents = Vec::with_capacity(
            LIB_HEADER.len() + payload.len() + RECORD_SEPARATOR.len() + LIB_FOOTER.len(),
        );
        contents.extend_from_slice(LIB_HEADER);
        contents.extend_from_slice(payload);
        contents.extend_from_slice(RECORD_SEPARATOR);
        contents.extend_from_slice(LIB_FOOTER);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;
        file.write_all(&contents)?;
        file.sync_data()?;
        Ok(())
    }
}

/// Random-access handle on an existing library file
pub struct ContainerFile {
    file: File,
}

impl ContainerFile {
    /// Current file length in bytes
    pub fn len(&self) -> Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    /// Move the cursor to an absolute offset
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Drop everything from `offset` on and leave the cursor there
    pub fn truncate_at(&mut self, offset: u64) -> Result<()> {
        self.file.set_len(offset)?;
        self.seek(offset)
    }

    /// Write all of `bytes` at the cursor
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.file.write_all(bytes)?;
        Ok(())
    }

    /// Read from the cursor to end of file
    pub fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Whether the last bytes of the file are the footer template
    pub fn ends_with_footer(&mut self) -> Result<bool> {
        let len = self.len()?;
        let footer_len = LIB_FOOTER.len() as u64;
        if len < footer_len {
            return Ok(false);
        }
        self.seek(len - footer_len)?;
        Ok(self.read_to_end()? == LIB_FOOTER)
    }

    /// Sync written data to disk
    ///
    /// Makes a completed rewrite durable. It does not close the window
    /// between truncate and write.
    pub fn sync(&mut self) -> Result<()> {
        self.file.sync_data()?;
        Ok(())
    }
}
