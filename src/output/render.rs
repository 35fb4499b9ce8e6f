//! Terminal rendering for guesses, the keyboard map, and the stats report
//!
//! Colored output paints white letters on the verdict's background color;
//! no-color mode prints the guess with its verdict symbols on a second line
//! instead.

use crate::core::{Verdict, Verdicts};
use crate::game::LetterStates;
use crate::stats::PlayerStats;
use chrono::{Local, TimeZone};
use colored::{ColoredString, Colorize};

/// Background colors per verdict (Wordle's palette)
pub const COLOR_MATCHED: (u8, u8, u8) = (0x53, 0x8D, 0x4E); // green
pub const COLOR_MISLAID: (u8, u8, u8) = (0xB5, 0x9F, 0x3B); // yellow
pub const COLOR_MISSING: (u8, u8, u8) = (0x3A, 0x3A, 0x3C); // gray

// Padding between the guess cells and the keyboard map
const PAD: &str = "    ";

fn paint(text: &str, verdict: Verdict) -> ColoredString {
    let (r, g, b) = match verdict {
        Verdict::Matched => COLOR_MATCHED,
        Verdict::Mislaid => COLOR_MISLAID,
        Verdict::Missing => COLOR_MISSING,
        Verdict::Unknown => return text.normal(),
    };
    text.white().on_truecolor(r, g, b)
}

/// Print one guess row followed by the keyboard state map
pub fn print_guess_row(guess: &str, verdicts: &Verdicts, letters: &LetterStates, no_color: bool) {
    if no_color {
        print_guess_row_plain(guess, verdicts, letters);
        return;
    }

    // The guess, one colored 3-wide cell per letter
    for (i, ch) in guess.chars().enumerate() {
        print!("{}", paint(&format!(" {ch} "), verdicts[i]));
    }

    // The keyboard map: known-missing letters go blank, known letters are
    // painted, untried letters print plain
    print!("{PAD}");
    for letter in b'a'..=b'z' {
        let ch = letter as char;
        match letters.state(letter) {
            Some(Verdict::Missing) => print!(" "),
            Some(v) => print!("{}", paint(&ch.to_string(), v)),
            None => print!("{ch}"),
        }
    }
    println!();
}

/// Two-line fallback: the guess and keyboard letters, then verdict symbols
/// under each
fn print_guess_row_plain(guess: &str, verdicts: &Verdicts, letters: &LetterStates) {
    print!("{guess}{PAD}");
    for letter in b'a'..=b'z' {
        match letters.state(letter) {
            Some(Verdict::Missing) => print!(" "),
            _ => print!("{}", letter as char),
        }
    }
    println!();

    print!("{verdicts}{PAD}");
    for letter in b'a'..=b'z' {
        let symbol = letters.state(letter).map_or(' ', Verdict::symbol);
        print!("{symbol}");
    }
    println!();
}

/// Print the player statistics report
///
/// `highlight` is the guess-count bucket of a just-won game (0 for none);
/// its bar is painted green, the rest gray.
pub fn print_stats_report(stats: &PlayerStats, no_color: bool, highlight: usize) {
    const FIELD_WIDTH: usize = 15;

    println!("{:<FIELD_WIDTH$} {}", "Played:", stats.play_count);
    if stats.play_count == 0 {
        return;
    }

    println!(
        "{:<FIELD_WIDTH$} {}",
        "Win %:",
        win_percent(stats.win_count, stats.play_count)
    );

    print!("{:<FIELD_WIDTH$} ", "Last win:");
    if stats.win_count > 0 {
        match Local.timestamp_opt(stats.last_win, 0).single() {
            Some(when) => println!("{}", when.format("%Y-%m-%d %H:%M:%S")),
            None => println!("{}", stats.last_win),
        }
    } else {
        println!("Never. So sad.");
    }

    println!("{:<FIELD_WIDTH$} {}", "Current Streak:", stats.cur_streak);
    println!("{:<FIELD_WIDTH$} {}", "Max Streak:", stats.max_streak);

    println!("Guess distribution:");
    let max_item = stats.guess_dist.iter().copied().max().unwrap_or(0);
    for (idx, &count) in stats.guess_dist.iter().enumerate() {
        let idx = idx + 1;
        print!("{idx} ");

        // Bar length scales against the fullest bucket
        let indent = bar_cells(count, max_item) + 1;
        let bar = format!("{}{count} ", " ".repeat(indent));

        if no_color {
            println!("{bar}");
        } else {
            let (r, g, b) = if idx == highlight {
                COLOR_MATCHED
            } else {
                COLOR_MISSING
            };
            println!("{}", bar.white().on_truecolor(r, g, b));
        }
    }
}

/// Win percentage rounded to the nearest whole number
fn win_percent(wins: u64, plays: u64) -> u64 {
    ((wins as f64 / plays as f64) * 100.0 + 0.5) as u64
}

/// Width of a distribution bar, out of 50 cells for the fullest bucket
fn bar_cells(count: u64, max: u64) -> usize {
    const MAX_RANGE: f64 = 50.0;
    if max == 0 {
        return 0;
    }
    ((count as f64 / max as f64) * MAX_RANGE) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_percent_rounds_to_nearest() {
        assert_eq!(win_percent(1, 2), 50);
        assert_eq!(win_percent(2, 3), 67);
        assert_eq!(win_percent(1, 3), 33);
        assert_eq!(win_percent(0, 5), 0);
        assert_eq!(win_percent(5, 5), 100);
    }

    #[test]
    fn bar_cells_scale_to_the_fullest_bucket() {
        assert_eq!(bar_cells(10, 10), 50);
        assert_eq!(bar_cells(5, 10), 25);
        assert_eq!(bar_cells(0, 10), 0);
        assert_eq!(bar_cells(0, 0), 0);
    }
}
