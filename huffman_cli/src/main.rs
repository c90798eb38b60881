mod cli_parse;

use cli_parse::{CliError, Commands};
use huffman_module::{decode, encode, CodecError, FileSink, FileSource};
use shared_files::stats::{CompressionStatsBuilder, StatsTimer};
use std::process::ExitCode;

/// Identifies this module in aggregated statistics output.
const ALGORITHM_ID: u8 = 3;

fn main() -> ExitCode {
    let args = match cli_parse::parse_args() {
        Ok(args) => args,
        Err(CliError::ClapError(e)) => e.exit(),
        Err(e) => {
            report_cli_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let (common, is_compression) = match &args.command {
        Commands::Compress(common) => (common, true),
        Commands::Decompress(common) => (common, false),
    };

    let mut timer = StatsTimer::new();
    let result = run(&common.input_file, &common.output_file, is_compression);
    let (duration, sections) = timer.end();

    match result {
        Ok((original_len, processed_len)) => {
            if common.stats {
                print_stats(
                    original_len,
                    processed_len,
                    duration,
                    is_compression,
                    sections,
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    input_file: &std::path::Path,
    output_file: &std::path::Path,
    is_compression: bool,
) -> Result<(usize, usize), CodecError> {
    let mut src = FileSource::open(input_file)?;
    let mut sink = FileSink::create(output_file)?;

    if is_compression {
        encode(&mut src, &mut sink)?;
    } else {
        decode(&mut src, &mut sink)?;
    }

    let original_len = std::fs::metadata(input_file)?.len() as usize;
    let processed_len = std::fs::metadata(output_file)?.len() as usize;
    Ok((original_len, processed_len))
}

fn print_stats(
    original_len: usize,
    processed_len: usize,
    duration: std::time::Duration,
    is_compression: bool,
    sections: Vec<shared_files::stats::SectionStats>,
) {
    let built = CompressionStatsBuilder::new()
        .algorithm_name("Huffman")
        .algorithm_id(ALGORITHM_ID)
        .version_used(1)
        .original_len(original_len)
        .processed_len(processed_len)
        .duration(duration)
        .is_compression(is_compression)
        .sections(sections)
        .build();

    match built {
        Ok(stats) => println!("{}", stats),
        Err(e) => eprintln!("Could not assemble statistics: {}", e),
    }
}

fn report_cli_error(error: &CliError) {
    match error {
        CliError::InputFileNotFound(path) => {
            eprintln!("Error: input file does not exist: {}", path.display());
        }
        CliError::InputNotFile(path) => {
            eprintln!("Error: input path is not a file: {}", path.display());
        }
        CliError::OutputParentDirNotFound(path) => {
            eprintln!("Error: output directory does not exist: {}", path.display());
        }
        CliError::OutputParentNotDir(path) => {
            eprintln!(
                "Error: parent path of the output file is not a directory: {}",
                path.display()
            );
        }
        CliError::ClapError(e) => {
            eprintln!("Error: {}", e);
        }
    }
}
