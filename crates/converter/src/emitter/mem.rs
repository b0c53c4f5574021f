// Internal Dependencies ------------------------------------------------------
use crate::color::Rgb888;
use crate::sprite::{PIXEL_COUNT, SPRITE_SIZE};
use crate::texel::Texels;


// Memory Initialization File Emitter -----------------------------------------
/// Emits a `$readmemh` compatible listing, one 3 digit RGB444 word per line.
pub fn emit(
    source_name: &str,
    transparent: Option<Rgb888>,
    texels: &Texels

) -> String {
    let mut lines = vec![
        format!("// Generated from: {}", source_name),
        "// Format: RGB444 (12-bit per pixel)".to_string(),
        format!("// Size: {}x{} = {} pixels", SPRITE_SIZE, SPRITE_SIZE, PIXEL_COUNT)
    ];
    if let Some(color) = transparent {
        lines.push(format!("// Transparent color: RGB{}", color));
    }
    lines.push("// 000 = Transparent (Black)".to_string());
    lines.push("".to_string());

    let width = SPRITE_SIZE as usize;
    for (y, row) in texels.rows().enumerate() {
        lines.push(format!("// Row {} (Pixel {}-{})", y, y * width, y * width + width - 1));
        lines.extend(row.iter().map(|t| t.quantize().to_string()));
        lines.push("".to_string());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}


// Statistics -----------------------------------------------------------------
#[derive(Debug, Eq, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub transparent: usize
}

impl Summary {
    pub fn from_texels(texels: &Texels) -> Self {
        Self {
            total: PIXEL_COUNT,
            transparent: texels.transparent_count()
        }
    }

    pub fn opaque(&self) -> usize {
        self.total - self.transparent
    }

    // Both percentages truncate, so they can add up to less than 100
    pub fn transparent_percent(&self) -> usize {
        self.transparent * 100 / self.total
    }

    pub fn opaque_percent(&self) -> usize {
        self.opaque() * 100 / self.total
    }
}
