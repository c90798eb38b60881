use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// File paths and options shared by the compress and decompress subcommands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// The path to the input file.
    pub input_file: PathBuf,
    /// The path where the output file will be written.
    pub output_file: PathBuf,
    /// Enables statistics output, such as compression ratio and processing speed.
    #[arg(short, long)]
    pub stats: bool,
}

/// The main operations available for the utility.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compresses the specified input file to the given output path.
    #[clap(alias = "c")]
    Compress(CommonArgs),
    /// Decompresses the specified input file to the given output path.
    #[clap(alias = "d")]
    Decompress(CommonArgs),
}

/// The main command line argument structure for the Huffman Coding Utility.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Canonical Huffman Coding Utility.",
    long_about = "A utility for compressing and decompressing files with a canonical Huffman code over a 256-symbol byte alphabet.",
    after_help = "
    COMMON USAGE:
      To use, start with the COMMAND (compress/decompress), followed by the INPUT and OUTPUT files.
      The '--stats' flag is optional and follows the file paths.

    EXAMPLES:
    # 1. Basic compression
    huffman_cli compress my_data.txt my_data.huff

    # 2. Decompressing and showing statistics
    huffman_cli decompress -s my_data.huff restored.txt

    # 3. Using the short alias for compression
    huffman_cli c source.bin dest.huff
"
)]
pub struct CliArgs {
    /// The primary operation (compress or decompress) and its file paths.
    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    /// Validates the command line arguments after parsing:
    /// 1. The input file exists and is a file.
    /// 2. The parent directory for the output file exists and is a directory.
    pub fn validate(&self) -> Result<(), CliError> {
        let common = match &self.command {
            Commands::Compress(args) => args,
            Commands::Decompress(args) => args,
        };

        if !common.input_file.exists() {
            return Err(CliError::InputFileNotFound(common.input_file.clone()));
        }
        if !common.input_file.is_file() {
            return Err(CliError::InputNotFile(common.input_file.clone()));
        }

        if let Some(parent) = common.output_file.parent() {
            if !parent.as_os_str().is_empty() {
                if !parent.exists() {
                    return Err(CliError::OutputParentDirNotFound(parent.to_path_buf()));
                }
                if !parent.is_dir() {
                    return Err(CliError::OutputParentNotDir(parent.to_path_buf()));
                }
            }
        }

        Ok(())
    }
}

/// Errors encountered during command line argument processing or file validation.
#[derive(Debug)]
pub enum CliError {
    /// The specified input file could not be found.
    InputFileNotFound(PathBuf),
    /// The specified input path exists, but is not a file.
    InputNotFile(PathBuf),
    /// The parent directory for the output file does not exist.
    OutputParentDirNotFound(PathBuf),
    /// The parent path for the output file exists, but is not a directory.
    OutputParentNotDir(PathBuf),
    /// An error originating directly from the argument parsing library (clap).
    ClapError(clap::Error),
}

impl From<clap::Error> for CliError {
    fn from(error: clap::Error) -> Self {
        CliError::ClapError(error)
    }
}

/// Parses and validates CLI arguments; the entry point for argument handling from `main`.
pub fn parse_args() -> Result<CliArgs, CliError> {
    let args = CliArgs::try_parse()?;
    args.validate()?;
    Ok(args)
}
