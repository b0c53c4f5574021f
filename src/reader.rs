// STD Dependencies -----------------------------------------------------------
use std::fs::{self, File};
use std::io::{Error as IOError, Read, Write};
use std::path::{Path, PathBuf};


// External Dependencies ------------------------------------------------------
use file_io::{FileError, FileReader, FileWriter};


// Concrete File IO Implementation --------------------------------------------
#[derive(Debug)]
pub struct DiskReader {
    base: PathBuf
}

impl DiskReader {
    pub fn from_absolute(base: PathBuf) -> Self {
        Self {
            base
        }
    }

    fn read_binary_file_inner(&self, full_path: &PathBuf) -> Result<(PathBuf, Vec<u8>), IOError> {
        let mut file = File::open(full_path)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok((full_path.clone(), contents))
    }

    fn write_file_inner(&self, path: &Path, data: String) -> Result<(), IOError> {
        let mut file = File::create(path)?;
        file.write_all(&data.into_bytes())?;
        file.flush()
    }
}

impl FileReader for DiskReader {
    fn base_dir(&self) -> &Path {
        &self.base
    }

    fn read_binary_file(
        &self,
        parent: Option<&PathBuf>,
        child: &Path,
    ) -> Result<(PathBuf, Vec<u8>), FileError> {
        let path = Self::resolve_path(&self.base, parent, child);
        self.read_binary_file_inner(&path)
            .map_err(|io| FileError { io, path: child.to_path_buf() })
    }
}

impl FileWriter for DiskReader {
    fn write_file(&mut self, path: &Path, data: String) -> Result<(), FileError> {
        let full_path = Self::resolve_path(&self.base, None, path);
        self.write_file_inner(&full_path, data).map_err(|io| FileError {
            io,
            path: path.to_path_buf(),
        })
    }

    fn remove_file(&mut self, path: &Path) -> Result<(), FileError> {
        let full_path = Self::resolve_path(&self.base, None, path);
        fs::remove_file(full_path).map_err(|io| FileError {
            io,
            path: path.to_path_buf(),
        })
    }
}
