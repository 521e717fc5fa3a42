use anyhow::{Context, Result};
use clap::Parser;
use shift_analysis::{Analyzer, Distribution};
use tracing::info;

/// Command-line arguments for the shift cipher decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text (stdout if omitted)")]
    output: Option<String>,

    /// Reference letter frequencies, one `letter value` pair per line
    #[arg(short, long, help = "Path to a reference frequency table (English if omitted)")]
    reference: Option<String>,

    #[arg(short, long, help = "Log analysis details")]
    verbose: bool,
}

/// Main entry point for the shift cipher decryptor.
fn main() -> Result<()> {
    // Parse command-line arguments and set up logging
    let cli: Cli = Cli::parse();
    init_tracing(cli.verbose);

    // Read the encrypted content from the input file
    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read the input file {}", cli.file))?;

    // Estimate the offset against the reference frequencies and decrypt
    let analyzer = Analyzer::new(load_reference(cli.reference.as_deref())?);
    let solution = analyzer.decode_shift(&content)?;
    info!(offset = solution.offset, key = %solution.key_letter(), "recovered shift");
    println!("Detected offset: {}", solution.offset);

    // Write the decrypted text to the output file, or stdout
    match &cli.output {
        Some(path) => std::fs::write(path, &solution.plaintext)
            .with_context(|| format!("Failed to write the output file {}", path))?,
        None => println!("{}", solution.plaintext),
    }

    Ok(())
}

/// Loads the reference letter frequencies.
///
/// # Arguments
///
/// * `path` - Optional path to a table with one `letter value` pair per line.
///
/// # Returns
///
/// The parsed table, or the English frequencies if no path is given.
fn load_reference(path: Option<&str>) -> Result<Distribution> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read the reference file {}", path))?;
            Ok(Distribution::parse_reference(&source)?)
        }
        None => Ok(Distribution::english()),
    }
}

/// Installs the stderr log subscriber.
///
/// # Arguments
///
/// * `verbose` - Logs analysis details at debug level when set.
fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
