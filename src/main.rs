// STD Dependencies -----------------------------------------------------------
use std::env;
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::process;


// External Dependencies ------------------------------------------------------
use clap::ArgMatches;
use converter::{Converter, OutputFormat, Rgb888};
use file_io::Logger;


// Modules --------------------------------------------------------------------
mod cli;
mod reader;

use reader::DiskReader;


// CLI Interface --------------------------------------------------------------
fn main() {
    let mut logger = Logger::new();
    let matches = match cli::app().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            err.print().ok();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // Support Silent Flag for all Commands
    if matches.is_present("silent") {
        logger.set_silent();
    }

    let (mut converter, matches) = match matches.subcommand() {
        Some(("rom", matches)) => {
            let name = matches.value_of("ROM_NAME").unwrap_or_default().to_string();
            (Converter::new(OutputFormat::Rom(name)), matches)
        },
        Some(("case", matches)) => {
            let name = matches.value_of("SPRITE_NAME").unwrap_or_default().to_string();
            let mut converter = Converter::new(OutputFormat::Case(name));
            if matches.is_present("NO_COLOR_NAMES") {
                converter.set_no_color_names();
            }
            (converter, matches)
        },
        Some(("mem", matches)) => (Converter::new(OutputFormat::Mem), matches),
        _ => {
            cli::app().print_help().ok();
            process::exit(1);
        }
    };

    if matches.is_present("no-color") {
        converter.set_no_color();
    }

    if let Some(color) = transparent_color(&mut logger, matches) {
        converter.set_transparent_color(color);
    }

    // Generated text goes to stdout unless an output file was given
    let output_file = matches.value_of("OUTPUT_FILE").map(PathBuf::from);
    if let Some(output_file) = output_file.as_ref() {
        converter.set_generate_file(output_file.clone());

    } else {
        logger.set_stderr();
    }

    let image_file = PathBuf::from(matches.value_of("IMAGE_FILE").unwrap_or_default());
    let mut io = DiskReader::from_absolute(env::current_dir().unwrap_or_default());
    match converter.convert(&mut logger, &mut io, image_file) {
        Ok(text) => {
            logger.flush();
            if output_file.is_none() {
                if let Err(err) = stdout().write_all(text.as_bytes()) {
                    logger.error(Logger::format_error(format!(
                        "Failed to write generated text to stdout: {}",
                        err
                    )));
                    process::exit(1);
                }
            }
        }
        Err(err) => {
            logger.error(err.to_string());
            process::exit(1);
        }
    }
}

fn transparent_color(logger: &mut Logger, matches: &ArgMatches) -> Option<Rgb888> {
    match matches.value_of("TRANSPARENT_COLOR").map(str::parse::<Rgb888>) {
        Some(Ok(color)) => Some(color),
        Some(Err(err)) => {
            logger.error(Logger::format_error(err.to_string()));
            process::exit(1);
        },
        None => None
    }
}
