// STD Dependencies -------------------------------------------------------
use std::path::{Path, PathBuf};
use std::collections::HashMap;
use std::io::{Cursor, Error as IOError, ErrorKind};


// External Dependencies --------------------------------------------------
use file_io::{FileReader, FileWriter, FileError};
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};


// Mocks ------------------------------------------------------------------
#[derive(Default)]
pub struct MockFileReader {
    pub base: PathBuf,
    pub read_only: bool,
    files: HashMap<PathBuf, String>,
    binary_files: HashMap<PathBuf, Vec<u8>>
}

impl MockFileReader {
    pub fn add_binary_file<S: Into<String>>(&mut self, path: S, bytes: Vec<u8>) {
        self.binary_files.insert(PathBuf::from(path.into()), bytes);
    }

    pub fn get_file<S: Into<String>>(&mut self, path: S) -> Option<String> {
        self.files.remove(&PathBuf::from(path.into()))
    }
}

impl FileReader for MockFileReader {
    fn read_binary_file(&self, parent_path: Option<&PathBuf>, child_path: &Path) -> Result<(PathBuf, Vec<u8>), FileError> {
        let path = Self::resolve_path(&self.base, parent_path, child_path);
        let contents = self.binary_files.get(&path).cloned().ok_or_else(|| {
            FileError {
                io: IOError::new(ErrorKind::NotFound, "No Mock file provided"),
                path: path.clone()
            }
        })?;
        Ok((path, contents))
    }

    fn base_dir(&self) -> &Path {
        &self.base
    }
}

impl FileWriter for MockFileReader {
    fn write_file(&mut self, path: &Path, data: String) -> Result<(), FileError> {
        if self.read_only {
            // Leave a truncated file behind, like a write that died halfway
            self.files.insert(path.to_path_buf(), data[..data.len() / 2].to_string());
            Err(FileError {
                io: IOError::new(ErrorKind::PermissionDenied, "Mock file system is read only"),
                path: path.to_path_buf()
            })

        } else {
            self.files.insert(path.to_path_buf(), data);
            Ok(())
        }
    }

    fn remove_file(&mut self, path: &Path) -> Result<(), FileError> {
        self.files.remove(path).map(|_| ()).ok_or_else(|| {
            FileError {
                io: IOError::new(ErrorKind::NotFound, "No Mock file provided"),
                path: path.to_path_buf()
            }
        })
    }
}


// Image Fixtures ---------------------------------------------------------
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

pub fn encode_png(buffer: RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(buffer).write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png).expect("Failed to encode PNG fixture");
    bytes
}
