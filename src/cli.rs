// External Dependencies ------------------------------------------------------
use clap::{Arg, Command};
use converter::Rgb888;


// CLI Definition -------------------------------------------------------------
pub fn app() -> Command<'static> {
    Command::new("hdlsprite")
        .version("0.1")
        .about("Converts 16x16 sprites into SystemVerilog ROMs, case statements and memory files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("silent")
            .long("silent")
            .short('s')
            .global(true)
            .help("Suppress status and warning output")
        )
        .arg(Arg::new("no-color")
            .long("no-color")
            .global(true)
            .help("Disable colored status output")
        )
        .subcommand(Command::new("rom")
            .about("converts an image into a packed RGB444 localparam array")
            .arg(Arg::new("IMAGE_FILE")
                .help("Input image file (16x16, other sizes are resized)")
                .required(true)
                .index(1)
            )
            .arg(Arg::new("ROM_NAME")
                .help("Name of the generated ROM, e.g. KIRBY")
                .required(true)
                .index(2)
            )
            .arg(Arg::new("TRANSPARENT_COLOR")
                .help("Color written as 12'h000, given as R,G,B e.g. 255,0,255")
                .validator(is_rgb_color)
                .index(3)
            )
            .arg(output_file("SystemVerilog file to generate instead of writing to stdout"))
        )
        .subcommand(Command::new("case")
            .about("converts an image into a per pixel SystemVerilog case statement")
            .arg(Arg::new("IMAGE_FILE")
                .help("Input image file (16x16, other sizes are resized)")
                .required(true)
                .index(1)
            )
            .arg(Arg::new("SPRITE_NAME")
                .help("Sprite name used for comments and color constants, e.g. DEE")
                .required(true)
                .index(2)
            )
            .arg(Arg::new("TRANSPARENT_COLOR")
                .long("transparent")
                .short('t')
                .takes_value(true)
                .validator(is_rgb_color)
                .help("Color treated as transparent, given as R,G,B e.g. 255,0,255")
            )
            .arg(Arg::new("NO_COLOR_NAMES")
                .long("no-color-names")
                .help("Write color values inline instead of generating localparam constants")
            )
            .arg(output_file("SystemVerilog file to generate instead of writing to stdout"))
        )
        .subcommand(Command::new("mem")
            .about("converts an image into a $readmemh compatible RGB444 memory file")
            .arg(Arg::new("IMAGE_FILE")
                .help("Input image file (16x16, other sizes are resized)")
                .required(true)
                .index(1)
            )
            .arg(Arg::new("OUTPUT_FILE")
                .help("Memory file to generate, e.g. kirby.mem")
                .required(true)
                .index(2)
            )
            .arg(Arg::new("TRANSPARENT_COLOR")
                .help("Color written as 000, given as R,G,B e.g. 255,0,255")
                .validator(is_rgb_color)
                .index(3)
            )
        )
}

fn output_file(help: &'static str) -> Arg<'static> {
    Arg::new("OUTPUT_FILE")
        .long("out-file")
        .short('o')
        .takes_value(true)
        .help(help)
}


// Helpers --------------------------------------------------------------------
fn is_rgb_color(color: &str) -> Result<(), String> {
    color.parse::<Rgb888>().map(|_| ()).map_err(|err| err.to_string())
}
