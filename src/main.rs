//! Mordle - CLI
//!
//! Terminal Wordle clone and word-list solver.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use mordle::commands::{print_player_stats, print_rules, run_list, run_play};
use mordle::core::WordStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mordle",
    about = "Play Wordle in the terminal, or list the words matching your hints",
    version,
    author
)]
struct Cli {
    /// Play a game in the terminal (the default)
    #[arg(long)]
    play: bool,

    /// List words instead of playing, filtered by any --hint
    #[arg(long)]
    list: bool,

    /// Print the game rules and exit
    #[arg(long)]
    rules: bool,

    /// Show saved player statistics and exit
    #[arg(long)]
    player_stats: bool,

    /// Use WORD as the secret word instead of a random pick
    #[arg(long, value_name = "WORD")]
    secret_word: Option<String>,

    /// Load the word list from FILE instead of the built-in list
    #[arg(long, value_name = "FILE")]
    word_file: Option<PathBuf>,

    /// A previous guess and its verdicts (!~x) to filter by; repeatable,
    /// implies --list
    #[arg(long, num_args = 2, value_names = ["WORD", "VERDICT"], action = ArgAction::Append)]
    hint: Vec<String>,

    /// Don't use colorized output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.rules {
        print_rules();
        return Ok(());
    }

    let store = match &cli.word_file {
        Some(path) => WordStore::from_file(path)?,
        None => WordStore::builtin(),
    };
    if store.is_empty() {
        bail!("word list is empty");
    }

    if cli.player_stats {
        print_player_stats(store.word_size(), cli.no_color);
        return Ok(());
    }

    // Hints come in WORD VERDICT pairs; any hint implies --list
    let hints: Vec<(String, String)> = cli
        .hint
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();

    if cli.list || !hints.is_empty() {
        return run_list(&store, &hints);
    }

    // Playing is already the default; --play only makes it explicit
    let _ = cli.play;
    run_play(store, cli.secret_word, cli.no_color)
}
