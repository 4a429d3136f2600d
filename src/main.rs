//! Wordiest - CLI
//!
//! Inspect the packed match archive and dictionary, score and submit words.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use wordiest::{
    commands::{
        SubmitConfig, decode_words, define_word, gmt_timestamp, parse_encoding,
        parse_word_indices, run_verify, score_words, show_match, submit_words, verify_progress_bar,
    },
    dictionary::Dictionary,
    matchdata::MatchDataStore,
    output::{
        print_decoded, print_definition, print_match, print_move_score, print_submission,
        print_verify_report,
    },
};

#[derive(Parser)]
#[command(
    name = "wordiest",
    about = "Wordiest match archive, dictionary and rating tools",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary index file
    #[arg(long, global = true, default_value = "words.idx")]
    index: PathBuf,

    /// Dictionary definitions file
    #[arg(long, global = true, default_value = "words.def")]
    defs: PathBuf,

    /// Packed match archive
    #[arg(long, global = true, default_value = "matchdata.packed")]
    archive: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a word in the dictionary
    Define {
        word: String,
    },

    /// Show a match's tiles and opponent summary
    Show {
        /// 0-based match index
        index: usize,
    },

    /// Score two words on a match
    Score {
        /// 0-based match index
        index: usize,

        /// First word as comma-separated tile indices, e.g. 0,2,9
        word1: String,

        /// Second word as comma-separated tile indices
        word2: Option<String>,
    },

    /// Decode a stored words encoding
    Decode {
        /// Hex (0x...) or decimal encoding
        encoding: String,

        /// Number of tiles in the match
        #[arg(short, long)]
        tiles: Option<usize>,
    },

    /// Submit two words and print the rating update and history record
    Submit {
        /// 0-based match index
        index: usize,

        /// First word as comma-separated tile indices
        word1: String,

        /// Second word as comma-separated tile indices
        word2: Option<String>,

        /// Current rating
        #[arg(short, long, default_value = "50.0")]
        rating: f64,

        /// Matches played before this one
        #[arg(short, long, default_value = "0")]
        matches: usize,
    },

    /// Replay every stored opponent move and check its score
    Verify {
        /// Limit number of matches to verify
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn read_asset(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    Ok(Dictionary::new(read_asset(&cli.index)?, read_asset(&cli.defs)?))
}

fn load_store(cli: &Cli) -> Result<MatchDataStore> {
    let data = read_asset(&cli.archive)?;
    MatchDataStore::new(data).with_context(|| format!("Invalid archive {}", cli.archive.display()))
}

fn parse_words(word1: &str, word2: Option<&str>) -> Result<(Vec<usize>, Vec<usize>)> {
    let word1 = parse_word_indices(word1).map_err(|e| anyhow::anyhow!(e))?;
    let word2 = parse_word_indices(word2.unwrap_or("")).map_err(|e| anyhow::anyhow!(e))?;
    Ok((word1, word2))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Define { word } => {
            let dictionary = load_dictionary(&cli)?;
            let result = define_word(&dictionary, word).map_err(|e| anyhow::anyhow!(e))?;
            print_definition(&result);
        }
        Commands::Show { index } => {
            let store = load_store(&cli)?;
            let summary = show_match(&store, *index).map_err(|e| anyhow::anyhow!(e))?;
            print_match(&summary);
        }
        Commands::Score {
            index,
            word1,
            word2,
        } => {
            let (word1, word2) = parse_words(word1, word2.as_deref())?;
            let store = load_store(&cli)?;
            let dictionary = load_dictionary(&cli)?;
            let result =
                score_words(&store, &dictionary, *index, word1, word2).map_err(|e| anyhow::anyhow!(e))?;
            print_move_score(&result);
        }
        Commands::Decode { encoding, tiles } => {
            let encoding = parse_encoding(encoding).map_err(|e| anyhow::anyhow!(e))?;
            let result = decode_words(encoding, *tiles).map_err(|e| anyhow::anyhow!(e))?;
            print_decoded(&result);
        }
        Commands::Submit {
            index,
            word1,
            word2,
            rating,
            matches,
        } => run_submit_command(&cli, *index, word1, word2.as_deref(), *rating, *matches)?,
        Commands::Verify { limit } => {
            let store = load_store(&cli)?;
            println!("🎯 Verifying {} matches...", limit.unwrap_or(store.count()).min(store.count()));
            let pb = verify_progress_bar(store.count());
            let report = run_verify(&store, *limit, &pb);
            print_verify_report(&report);
        }
    }

    Ok(())
}

fn run_submit_command(
    cli: &Cli,
    index: usize,
    word1: &str,
    word2: Option<&str>,
    rating: f64,
    matches: usize,
) -> Result<()> {
    if !(0.0..=100.0).contains(&rating) {
        bail!("Rating must be between 0 and 100, got {rating}");
    }

    let (word1, word2) = parse_words(word1, word2)?;
    let store = load_store(cli)?;
    let dictionary = load_dictionary(cli)?;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the Unix epoch")?;
    let mut config = SubmitConfig::new(index, word1, word2, gmt_timestamp(now.as_secs()));
    config.rating = rating;
    config.matches_played = matches;

    let result = submit_words(&store, &dictionary, config).map_err(|e| anyhow::anyhow!(e))?;
    let history_json = serde_json::to_string_pretty(&result.submission.entry)
        .context("Failed to serialize history record")?;
    print_submission(&result, &history_json);
    Ok(())
}
