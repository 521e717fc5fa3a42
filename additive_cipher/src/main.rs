use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shift_analysis::{Caesar, Cipher};

// Defining the command-line arguments.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    #[arg(short, long, help = "Offset of the cipher (0-25)")]
    key: usize,

    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read the input file {}", cli.file))?;

    let cipher = Caesar::new(cli.key)?;
    let result = run(&cipher, &content, cli.mode);

    match &cli.output {
        Some(path) => std::fs::write(path, result)
            .with_context(|| format!("Failed to write the output file {}", path))?,
        None => println!("{}", result),
    }

    Ok(())
}

fn run<C: Cipher>(cipher: &C, content: &str, mode: OperationMode) -> String {
    match mode {
        OperationMode::Encrypt => cipher.encrypt(content),
        OperationMode::Decrypt => cipher.decrypt(content),
    }
}
