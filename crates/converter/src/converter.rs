// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;


// External Dependencies ------------------------------------------------------
use colored::Colorize;
use file_io::{FileReader, FileWriter, Logger};


// Internal Dependencies ------------------------------------------------------
use crate::color::Rgb888;
use crate::emitter::{case, mem, rom};
use crate::emitter::mem::Summary;
use crate::sprite::{Channels, Sprite};
use crate::texel::{ColorTable, Texels};


// Output Formats -------------------------------------------------------------
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OutputFormat {
    /// Packed `localparam` array, named `<NAME>_ROM`.
    Rom(String),
    /// Nested `case` block, constants prefixed with the sprite name.
    Case(String),
    /// Raw `.mem` listing.
    Mem
}

impl OutputFormat {
    fn channels(&self) -> Channels {
        match self {
            OutputFormat::Rom(_) => Channels::Rgb,
            OutputFormat::Case(_) | OutputFormat::Mem => Channels::Rgba
        }
    }

    fn artifact(&self) -> &'static str {
        match self {
            OutputFormat::Rom(_) => "ROM array",
            OutputFormat::Case(_) => "case statement",
            OutputFormat::Mem => "memory file"
        }
    }
}


// Converter Pipeline Implementation ------------------------------------------
pub struct Converter {
    format: OutputFormat,
    no_color: bool,
    color_names: bool,
    transparent_color: Option<Rgb888>,
    generate_file: Option<PathBuf>
}

impl Converter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            no_color: false,
            color_names: true,
            transparent_color: None,
            generate_file: None
        }
    }

    pub fn set_no_color(&mut self) {
        self.no_color = true;
    }

    pub fn set_no_color_names(&mut self) {
        self.color_names = false;
    }

    pub fn set_transparent_color(&mut self, color: Rgb888) {
        self.transparent_color = Some(color);
    }

    pub fn set_generate_file(&mut self, path: PathBuf) {
        self.generate_file = Some(path);
    }

    /// Runs load, transform and emit for a single image and returns the
    /// generated text, which is also written out if an output file is set.
    pub fn convert<T: FileReader + FileWriter>(
        &mut self,
        logger: &mut Logger,
        io: &mut T,
        file: PathBuf

    ) -> Result<String, ConversionError> {
        if self.no_color {
            colored::control::set_override(false);
        }
        logger.status("Converting", format!("\"{}\" ...", file.display()));

        let sprite = self.load(logger, io, &file)?;
        let texels = Texels::from_sprite(&sprite, self.transparent_color);
        let text = self.emit(logger, &file, &texels);
        self.generate(logger, io, &file, &texels, &text)?;
        Ok(text)
    }
}

impl Converter {
    fn load<T: FileReader>(
        &self,
        logger: &mut Logger,
        io: &T,
        file: &PathBuf

    ) -> Result<Sprite, ConversionError> {
        let start = Instant::now();
        let (_, bytes) = io.read_binary_file(None, file).map_err(|err| {
            ConversionError::new("file io", format!("Failed to read image file {}", err))
        })?;
        let sprite = Sprite::decode(&bytes, self.format.channels(), logger).map_err(|err| {
            ConversionError::new("image decoding", err.to_string())
        })?;
        logger.status("Loading", format!("completed in {}ms.", start.elapsed().as_millis()));
        Ok(sprite)
    }

    fn emit(&self, logger: &mut Logger, file: &PathBuf, texels: &Texels) -> String {
        let start = Instant::now();
        let text = match &self.format {
            OutputFormat::Rom(name) => rom::emit(
                name,
                &file.display().to_string(),
                self.transparent_color,
                texels
            ),
            OutputFormat::Case(name) => case::emit(
                name,
                texels,
                &ColorTable::from_texels(texels),
                self.color_names
            ),
            OutputFormat::Mem => mem::emit(
                &file.file_name().map(|f| f.to_string_lossy().to_string()).unwrap_or_default(),
                self.transparent_color,
                texels
            )
        };
        logger.status("Emitting", format!("completed in {}ms.", start.elapsed().as_millis()));
        text
    }

    fn generate<T: FileWriter>(
        &mut self,
        logger: &mut Logger,
        io: &mut T,
        file: &PathBuf,
        texels: &Texels,
        text: &str

    ) -> Result<(), ConversionError> {
        let output_file = self.generate_file.take();
        if let Some(output_file) = output_file.as_ref() {
            if let Err(err) = io.write_file(output_file, text.to_string()) {
                // Never leave a truncated artifact behind
                io.remove_file(output_file).ok();
                return Err(ConversionError::new(
                    "output",
                    format!("Failed to write {} to file {}", self.format.artifact(), err)
                ));
            }
            logger.status("Written", format!("{} to \"{}\".", self.format.artifact(), output_file.display()));
        }

        if self.format == OutputFormat::Mem {
            let summary = Summary::from_texels(texels);
            logger.info(format!("Input:        {}", file.display()));
            if let Some(output_file) = output_file {
                logger.info(format!("Output:       {}", output_file.display()));
            }
            logger.info(format!("Total pixels: {}", summary.total));
            logger.info(format!("Transparent:  {} ({}%)", summary.transparent, summary.transparent_percent()));
            logger.info(format!("Opaque:       {} ({}%)", summary.opaque(), summary.opaque_percent()));
        }
        Ok(())
    }
}


// Converter Error Abstraction ------------------------------------------------
#[derive(Debug)]
pub struct ConversionError {
    stage: String,
    message: String
}

impl ConversionError {
    fn new<S: Into<String>>(stage: &str, message: S) -> Self {
        Self {
            stage: stage.to_string(),
            message: message.into()
        }
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "       {} Conversion failed during {} phase!\n\n{}", "Error".bright_red(), self.stage, self.message)
    }
}
