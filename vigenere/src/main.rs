use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shift_analysis::{Cipher, Vigenere};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    let cipher = Vigenere::new(&cli.key)?;

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", cipher.key());
            cipher.encrypt(&content)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", cipher.key());
            cipher.decrypt(&content)
        }
    };

    // Write result to output file
    std::fs::write(&cli.output, result)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "vigenere", "-f", "in.txt", "-k", "theatre", "-o", "out.txt", "-m", "decrypt",
        ])
        .unwrap();
        assert_eq!(cli.key, "theatre");
        assert_eq!(cli.mode, OperationMode::Decrypt);
    }

    #[test]
    fn test_cli_requires_mode() {
        assert!(Cli::try_parse_from(["vigenere", "-f", "a", "-k", "b", "-o", "c"]).is_err());
    }
}
