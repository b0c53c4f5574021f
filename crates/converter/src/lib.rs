// Modules --------------------------------------------------------------------
pub mod color;
pub mod converter;
pub mod emitter;
pub mod sprite;
pub mod texel;
#[cfg(test)] mod mocks;


// Re-Exports -----------------------------------------------------------------
pub use crate::color::{ColorParseError, Rgb444, Rgb888};
pub use crate::converter::{ConversionError, Converter, OutputFormat};
pub use crate::sprite::{Channels, Sprite, SpriteError};
pub use crate::texel::{ColorTable, Texel, Texels};
