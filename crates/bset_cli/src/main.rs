use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use bset_core::BloomFilter;

const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

#[derive(Parser)]
#[command(name = "bset", about = "BSET CLI — word-list membership checks")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print every word of FILE that is missing from the word list
    Check {
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = DEFAULT_WORD_LIST)]
        words: PathBuf,
        #[arg(long, default_value_t = 50_000)]
        expected_items: u64,
        #[arg(long, default_value_t = 0.001)]
        fp_rate: f64,
    },

    /// Query individual words against the word-list filter
    Probe {
        #[arg(long, default_value = DEFAULT_WORD_LIST)]
        words: PathBuf,
        #[arg(long, default_value_t = 50_000)]
        expected_items: u64,
        #[arg(long, default_value_t = 0.001)]
        fp_rate: f64,
        #[arg(required = true)]
        query: Vec<String>,
    },
}

/// Lowercased runs of `[a-z0-9_]`, in file order. Everything else is a
/// separator.
fn tokenize(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("can't open {}", path.display()))?;
    let mut words = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line?.to_ascii_lowercase();
        for tok in line.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_')) {
            if !tok.is_empty() {
                words.push(tok.to_string());
            }
        }
    }
    Ok(words)
}

fn load_word_filter(words: &Path, expected_items: u64, fp_rate: f64) -> Result<BloomFilter> {
    let list = tokenize(words)?;
    if list.is_empty() {
        bail!("word list {} has no words", words.display());
    }
    let mut filter = BloomFilter::new(expected_items, fp_rate)?;
    for word in &list {
        filter.add(word.as_bytes());
    }
    tracing::debug!(
        words = list.len(),
        bits = filter.bit_count(),
        hashes = filter.hash_count(),
        projected_fp = filter.projected_fp_rate(),
        "word list loaded"
    );
    Ok(filter)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Check {
            file,
            words,
            expected_items,
            fp_rate,
        } => {
            let filter = load_word_filter(&words, expected_items, fp_rate)?;
            for word in tokenize(&file)? {
                if !filter.contains(word.as_bytes()) {
                    println!("{word}");
                }
            }
        }
        Cmd::Probe {
            words,
            expected_items,
            fp_rate,
            query,
        } => {
            let filter = load_word_filter(&words, expected_items, fp_rate)?;
            for q in query {
                let q = q.to_ascii_lowercase();
                let verdict = if filter.contains(q.as_bytes()) {
                    "maybe"
                } else {
                    "no"
                };
                println!("{q}: {verdict}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::tokenize;
    use std::io::Write;

    fn tokens_of(text: &str) -> Vec<String> {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(text.as_bytes()).unwrap();
        tokenize(f.path()).unwrap()
    }

    #[test]
    fn splits_on_punctuation_and_lowercases() {
        assert_eq!(
            tokens_of("Hello, world!\nsnake_case x2\n"),
            ["hello", "world", "snake_case", "x2"]
        );
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokens_of("").is_empty());
        assert!(tokens_of("...!?\n\n").is_empty());
    }
}
