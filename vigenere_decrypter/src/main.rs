use anyhow::{Context, Result};
use clap::Parser;
use shift_analysis::{Analyzer, Distribution, VigenereSolution, examine};
use tracing::{debug, info, warn};

/// Command-line arguments for the Vigenère decryptor program.
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

    /// Skips the Kasiski examination
    #[arg(short = 'l', long, help = "Known key length")]
    key_length: Option<usize>,

    #[arg(short, long, help = "Log analysis details")]
    verbose: bool,
}

/// Below this many letters the trigram statistics are thin
const MIN_LETTERS: usize = 50;

/// Number of factor votes listed in verbose mode
const TOP_VOTES: usize = 5;

/// Main entry point for the Vigenère decryptor.
fn main() -> Result<()> {
    // Parse command-line arguments and set up logging
    let cli: Cli = Cli::parse();
    init_tracing(cli.verbose);

    // Read the encrypted content from the input file
    let input: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    let letters = shift_analysis::normalize(&input).len();
    if letters < MIN_LETTERS {
        warn!(letters, "text may be too short for reliable analysis");
    }

    // Recover key length, key and plaintext
    let analyzer = Analyzer::new(load_reference(cli.reference.as_deref())?);
    let solution = decrypt(&analyzer, &input, cli.key_length)?;
    info!(key_length = solution.key_length(), "recovered key");

    // Key goes to stdout
    println!("{}", solution.key);

    // Write decrypted text to file, or stdout
    match &cli.output {
        Some(path) => std::fs::write(path, &solution.plaintext)
            .with_context(|| format!("Failed to write output file {}", path))?,
        None => println!("{}", solution.plaintext),
    }

    Ok(())
}

/// Recovers the key and plaintext of a Vigenère ciphertext.
///
/// # Arguments
///
/// * `analyzer` - The analyzer holding the reference distribution.
/// * `input` - The encrypted text.
/// * `key_length` - A known key length; the Kasiski examination picks one if `None`.
///
/// # Returns
///
/// The recovered key and plaintext, or the analysis error.
fn decrypt(analyzer: &Analyzer, input: &str, key_length: Option<usize>) -> Result<VigenereSolution> {
    let solution = match key_length {
        Some(key_length) => analyzer.decode_vigenere_with_length(input, key_length)?,
        None => {
            // Log the strongest factor votes before decoding
            let mut votes = examine(input).votes;
            votes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            votes.truncate(TOP_VOTES);
            debug!(?votes, "top factor votes");

            analyzer.decode_vigenere(input)?
        }
    };

    Ok(solution)
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
                .with_context(|| format!("Failed to read reference file {}", path))?;
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
