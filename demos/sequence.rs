use std::io::{self, BufWriter, Write};

use clap::Parser;
use debruijn_rs::{recursive, verify, DeBruijn};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints the lexicographically minimal de Bruijn sequence B(m, n).
///
/// Usage: cargo run --example sequence -- -m 4 -n 10
#[derive(Parser, Debug)]
#[command(name = "sequence", about = "Print a de Bruijn sequence")]
struct Cli {
    /// Alphabet size m (values below 2 are treated as 2)
    #[arg(short = 'm', long, default_value_t = 4)]
    alphabet_size: usize,

    /// Window length n (0 is treated as 1)
    #[arg(short = 'n', long, default_value_t = 10)]
    order: usize,

    /// Symbols to print for digits 0, 1, ..., e.g. "ACGT". Overrides -m.
    #[arg(long)]
    alphabet: Option<String>,

    /// Use the recursive reference generator
    #[arg(long)]
    reference: bool,

    /// Check the de Bruijn property and report it on stderr
    #[arg(long)]
    verify: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let symbols: Option<Vec<char>> = cli.alphabet.as_deref().map(|s| s.chars().collect());
    let alphabet_size = symbols.as_ref().map_or(cli.alphabet_size, Vec::len);

    let digits: Vec<usize> = if cli.reference {
        recursive::de_bruijn(alphabet_size, cli.order)
    } else {
        DeBruijn::new(alphabet_size, cli.order).collect()
    };
    info!(
        alphabet_size,
        order = cli.order,
        len = digits.len(),
        "generated sequence"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match &symbols {
        Some(symbols) => {
            for &d in &digits {
                // Coerced alphabets can produce digits without a symbol
                match symbols.get(d) {
                    Some(c) => write!(out, "{c}")?,
                    None => write!(out, "{d}")?,
                }
            }
        }
        None => {
            for &d in &digits {
                write!(out, "{d} ")?;
            }
        }
    }
    writeln!(out)?;
    out.flush()?;

    if cli.verify {
        let ok = verify::is_de_bruijn(&digits, alphabet_size, cli.order);
        eprintln!("de Bruijn property: {}", if ok { "ok" } else { "FAILED" });
    }

    Ok(())
}
