// Internal Dependencies ------------------------------------------------------
use crate::color::Rgb888;
use crate::sprite::PIXEL_COUNT;
use crate::texel::{ColorTable, Texels};


// SystemVerilog Case Statement Emitter ---------------------------------------
/// Emits a `case (sprite_y)` / `case (sprite_x)` block for the sprite.
///
/// With `color_names` set, a `localparam rgb_t` palette precedes the block and
/// branches reference `NAME_COLOR_n`; otherwise colors are written inline.
pub fn emit(
    sprite_name: &str,
    texels: &Texels,
    table: &ColorTable,
    color_names: bool

) -> String {
    let mut lines = Vec::new();

    if color_names {
        lines.push(format!("// {} Color Palette", sprite_name));
        for (name, color) in table.by_name() {
            lines.push(format!("localparam rgb_t {}_{} = '{};", sprite_name, name, sv_color(color)));
        }
        lines.push("".to_string());
    }

    lines.push(format!("// {} sprite (16x16)", sprite_name));
    lines.push("case (sprite_y)".to_string());

    for (y, row) in texels.rows().enumerate() {
        let groups = Texels::row_groups(row);
        if groups.is_empty() {
            continue;
        }

        lines.push(format!("    // Row {}", y));
        lines.push(format!("    4'd{}: begin", y));
        lines.push("        case (sprite_x)".to_string());
        for (color, columns) in groups {
            let color = match table.name(&color) {
                Some(name) if color_names => format!("{}_{}", sprite_name, name),
                _ => sv_color(color)
            };
            let columns: Vec<String> = columns.iter().map(|x| format!("4'd{}", x)).collect();
            lines.push(format!("            {}: begin", columns.join(", ")));
            lines.push(format!("                color = {};", color));
            lines.push("                enable = 1'b1;".to_string());
            lines.push("            end".to_string());
        }
        lines.push("            default: begin".to_string());
        lines.push("                enable = 1'b0;".to_string());
        lines.push("            end".to_string());
        lines.push("        endcase".to_string());
        lines.push("    end".to_string());
        lines.push("".to_string());
    }

    lines.push("    default: begin".to_string());
    lines.push("        enable = 1'b0;".to_string());
    lines.push("        color = TRANSPARENT;".to_string());
    lines.push("    end".to_string());
    lines.push("endcase".to_string());
    lines.push("".to_string());

    let visible = texels.opaque_count();
    lines.push("// Statistics:".to_string());
    lines.push(format!("// Total non-transparent pixels: {}", visible));
    lines.push(format!("// Unique colors: {}", table.len()));
    lines.push(format!("// Transparency: {} pixels", PIXEL_COUNT - visible));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn sv_color(color: Rgb888) -> String {
    format!("{{r: 8'd{}, g: 8'd{}, b: 8'd{}}}", color.r, color.g, color.b)
}
