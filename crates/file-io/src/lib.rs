// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::path::{Path, PathBuf};
use std::io::Error as IOError;


// External Dependencies ------------------------------------------------------
use colored::Colorize;


// Generic Traits -------------------------------------------------------------
#[derive(Debug)]
pub struct FileError {
    pub io: IOError,
    pub path: PathBuf
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\": {}", self.path.display(), self.io)
    }
}

/// Buffered console output shared by all converters.
///
/// Messages are collected and only written out on `flush` or `error`, so a
/// failed run never interleaves half a status report with the error.
pub struct Logger {
    silent: bool,
    stderr: bool,
    output: Vec<String>
}

impl Logger {

    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            silent: false,
            stderr: false,
            output: Vec::new()
        }
    }

    pub fn format_error<S: Into<String>>(s: S) -> String {
        format!("       {} {}", "Error".bright_red(), s.into())
    }

    pub fn set_silent(&mut self) {
        self.silent = true;
    }

    /// Route flushed messages to stderr, keeping stdout free for generated text.
    pub fn set_stderr(&mut self) {
        self.stderr = true;
    }

    pub fn warning<S: Into<String>>(&mut self, s: S) {
        if !self.silent {
            self.output.push(format!("     {} {}", "Warning".bright_yellow(), s.into()));
        }
    }

    pub fn info<S: Into<String>>(&mut self, s: S) {
        if !self.silent {
            self.output.push(format!("        {} {}", "Info".bright_blue(), s.into()));
        }
    }

    pub fn status<S: Into<String>, U: Into<String>>(&mut self, s: S, m: U) {
        if !self.silent {
            self.output.push(format!("{: >12} {}", s.into().bright_green(), m.into()));
        }
    }

    pub fn flush(&mut self) {
        if !self.output.is_empty() {
            if self.stderr {
                eprintln!("{}", self);

            } else {
                println!("{}", self);
            }
        }
        self.output.clear();
    }

    pub fn error<S: Into<String>>(&mut self, s: S) {
        self.flush();
        eprintln!("{}", s.into());
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.output.join("\n"))
    }
}

pub trait FileReader {

    fn read_binary_file(&self, parent: Option<&PathBuf>, child: &Path) -> Result<(PathBuf, Vec<u8>), FileError>;

    fn base_dir(&self) -> &Path;

    fn resolve_path(base: &Path, parent: Option<&PathBuf>, child: &Path) -> PathBuf {
        if child.is_absolute() {
            return child.to_path_buf();
        }
        let mut full_path = base.to_path_buf();
        if let Some(parent) = parent {
            let mut p = parent.clone();
            p.set_file_name("");
            full_path.push(p.strip_prefix(base).unwrap_or(&p));
        }
        full_path.push(child);
        full_path
    }

}

pub trait FileWriter {
    fn write_file(&mut self, path: &Path, data: String) -> Result<(), FileError>;
    fn remove_file(&mut self, path: &Path) -> Result<(), FileError>;
}


// Tests ----------------------------------------------------------------------
#[cfg(test)]
mod test {
    use std::path::{Path, PathBuf};
    use super::{FileError, FileReader, Logger};

    struct Base(PathBuf);

    impl FileReader for Base {
        fn read_binary_file(&self, _: Option<&PathBuf>, child: &Path) -> Result<(PathBuf, Vec<u8>), FileError> {
            Ok((Self::resolve_path(&self.0, None, child), Vec::new()))
        }

        fn base_dir(&self) -> &Path {
            &self.0
        }
    }

    #[test]
    fn test_resolve_relative() {
        let path = Base::resolve_path(Path::new("/sprites"), None, Path::new("kirby.png"));
        assert_eq!(path, PathBuf::from("/sprites/kirby.png"));
    }

    #[test]
    fn test_resolve_relative_to_parent() {
        let parent = PathBuf::from("/sprites/enemies/dee.png");
        let path = Base::resolve_path(Path::new("/sprites"), Some(&parent), Path::new("dee.mem"));
        assert_eq!(path, PathBuf::from("/sprites/enemies/dee.mem"));
    }

    #[test]
    fn test_resolve_absolute() {
        let reader = Base(PathBuf::from("/sprites"));
        let (path, _) = reader.read_binary_file(None, Path::new("/tmp/kirby.png")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/kirby.png"));
    }

    #[test]
    fn test_logger_silent() {
        let mut logger = Logger::new();
        logger.set_silent();
        logger.status("Converted", "\"kirby.png\"");
        logger.warning("Image is 32x32, resizing to 16x16");
        logger.info("Total pixels: 256");
        assert_eq!(logger.to_string(), "");
    }

    #[test]
    fn test_logger_status_alignment() {
        colored::control::set_override(false);
        let mut logger = Logger::new();
        logger.status("Loading", "\"kirby.png\" ...");
        logger.info("Unique colors: 4");
        assert_eq!(logger.to_string(), "     Loading \"kirby.png\" ...\n        Info Unique colors: 4");
    }
}
