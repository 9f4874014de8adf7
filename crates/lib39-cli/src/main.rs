//! lib39 command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Phrase for hex entropy
//! lib39 generate 80808080808080808080808080808080
//!
//! # Fresh 24-word Japanese phrase
//! lib39 random --words 24 --language japanese
//!
//! # Check a phrase and print the entropy it encodes
//! lib39 validate --show-entropy letter advice cage absurd amount doctor \
//!     acoustic avoid letter advice cage above
//! ```

use clap::{Parser, Subcommand};
use lib39_mnemonic::{Language, MnemonicGenerator, MnemonicValidator, WordCount};
use rand::rngs::OsRng;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// BIP-39 mnemonic tool
#[derive(Parser, Debug)]
#[command(name = "lib39")]
#[command(about = "Convert between entropy and BIP-39 mnemonic phrases")]
#[command(version)]
struct Args {
    /// Word list language (english, japanese, french, spanish)
    #[arg(short, long, global = true, default_value = "english")]
    language: Language,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the phrase for hex-encoded entropy
    Generate {
        /// 32 to 64 hex digits
        entropy: String,
    },

    /// Print a phrase built from fresh random entropy
    Random {
        /// Number of words (12, 15, 18, 21 or 24)
        #[arg(short, long, default_value = "12")]
        words: usize,
    },

    /// Check a phrase's words and checksum
    Validate {
        /// Phrase words; joined with the language's separator
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Print the recovered entropy as hex
        #[arg(long)]
        show_entropy: bool,
    },

    /// List words starting with a prefix
    Words {
        /// Prefix to match
        prefix: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!(language = %args.language, "lib39 starting");

    match args.command {
        Command::Generate { entropy } => {
            let phrase = MnemonicGenerator::for_language(args.language)
                .create_mnemonic_from_hex(entropy.trim())?;
            println!("{phrase}");
        }
        Command::Random { words } => {
            let word_count = WordCount::try_from(words)?;
            let phrase = MnemonicGenerator::for_language(args.language)
                .generate(word_count, &mut OsRng)?;
            println!("{phrase}");
        }
        Command::Validate { phrase, show_entropy } => {
            let separator = args.language.separator().to_string();
            let phrase = phrase.join(&separator);
            let entropy = MnemonicValidator::for_language(args.language).to_entropy(&phrase)?;
            if show_entropy {
                println!("{}", hex::encode(&*entropy));
            } else {
                println!("valid");
            }
        }
        Command::Words { prefix } => {
            for word in args.language.word_list().words_with_prefix(&prefix) {
                println!("{word}");
            }
        }
    }

    Ok(())
}
