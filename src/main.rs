use std::{path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use log::debug;

#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Cli {
    /// The markdown file to convert
    input_file: PathBuf,

    /// Where to write the html, created or truncated
    output_file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // usage errors exit with 1 rather than clap's 2
            e.print().ok();
            return ExitCode::FAILURE;
        }
    };
    debug!("Input: {}", args.input_file.display());
    debug!("Output: {}", args.output_file.display());

    match markdown2html::convert_file(&args.input_file, &args.output_file) {
        Ok(stats) => {
            debug!("Converted {} lines, {} headings", stats.lines, stats.headings);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
