// Internal Dependencies ------------------------------------------------------
use crate::color::Rgb888;
use crate::sprite::PIXEL_COUNT;
use crate::texel::Texels;


// Constants ------------------------------------------------------------------
const VALUES_PER_LINE: usize = 8;
const CONTINUATION_INDENT: &str = "              ";


// SystemVerilog ROM Array Emitter --------------------------------------------
pub fn emit(
    rom_name: &str,
    source: &str,
    transparent: Option<Rgb888>,
    texels: &Texels

) -> String {
    let transparent = transparent.map(|c| c.to_string()).unwrap_or_else(|| {
        "None (use 12'h000)".to_string()
    });

    let mut lines = vec![
        format!("// {} sprite ROM (16x16 pixels, RGB444 format)", rom_name),
        format!("// Generated from: {}", source),
        format!("// Transparent color: {}", transparent),
        format!("localparam logic [11:0] {}_ROM [0:255] = '{{", rom_name)
    ];

    let mut count = 0;
    for (y, row) in texels.rows().enumerate() {
        for (i, chunk) in row.chunks(VALUES_PER_LINE).enumerate() {
            let mut line = if i == 0 {
                format!("    // Row {} ", y)

            } else {
                CONTINUATION_INDENT.to_string()
            };
            for texel in chunk {
                count += 1;
                line.push_str(&format!("12'h{}", texel.quantize()));
                if count < PIXEL_COUNT {
                    line.push_str(", ");
                }
            }
            lines.push(line);
        }
    }

    lines.push("};".to_string());
    lines.push("".to_string());
    lines.push(format!("// Total pixels: {}", count));
    lines.push(format!("// ROM size: {} bits = {} bytes", count * 12, count * 12 / 8));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
