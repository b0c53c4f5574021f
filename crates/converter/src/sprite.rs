// STD Dependencies -----------------------------------------------------------
use std::fmt;


// External Dependencies ------------------------------------------------------
use file_io::Logger;
use image::{imageops, ImageError, RgbaImage};
use image::imageops::FilterType;


// Internal Dependencies ------------------------------------------------------
use crate::color::Rgb888;


// Constants ------------------------------------------------------------------
pub const SPRITE_SIZE: u32 = 16;
pub const PIXEL_COUNT: usize = (SPRITE_SIZE * SPRITE_SIZE) as usize;


// Types ----------------------------------------------------------------------
/// Whether the alpha channel takes part in transparency decisions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channels {
    Rgb,
    Rgba
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pixel {
    pub color: Rgb888,
    pub alpha: Option<u8>
}


// 16x16 Sprite Abstraction ---------------------------------------------------
#[derive(Debug)]
pub struct Sprite {
    pixels: Vec<Pixel>
}

impl Sprite {
    pub fn decode(bytes: &[u8], channels: Channels, logger: &mut Logger) -> Result<Self, SpriteError> {
        let img = image::load_from_memory(bytes).map_err(SpriteError::Decode)?;
        Ok(Self::from_rgba(img.to_rgba8(), channels, logger))
    }

    /// Nearest neighbor keeps hard pixel edges intact when the source is not 16x16.
    pub fn from_rgba(buffer: RgbaImage, channels: Channels, logger: &mut Logger) -> Self {
        let (w, h) = buffer.dimensions();
        let buffer = if (w, h) != (SPRITE_SIZE, SPRITE_SIZE) {
            logger.warning(format!("Image is {}x{}, resizing to {}x{}", w, h, SPRITE_SIZE, SPRITE_SIZE));
            imageops::resize(&buffer, SPRITE_SIZE, SPRITE_SIZE, FilterType::Nearest)

        } else {
            buffer
        };

        let pixels = buffer.pixels().map(|p| {
            let [r, g, b, a] = p.0;
            Pixel {
                color: Rgb888::new(r, g, b),
                alpha: match channels {
                    Channels::Rgb => None,
                    Channels::Rgba => Some(a)
                }
            }

        }).collect();

        Self {
            pixels
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}


// Errors ---------------------------------------------------------------------
#[derive(Debug)]
pub enum SpriteError {
    Decode(ImageError)
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpriteError::Decode(err) => write!(f, "Failed to decode image: {}", err)
        }
    }
}
