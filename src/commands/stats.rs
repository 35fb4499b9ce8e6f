//! The player-stats command

use crate::game::Session;
use crate::output::render;
use crate::stats::PlayerStats;

/// Print the saved statistics report for the given game shape
pub fn print_player_stats(word_size: usize, no_color: bool) {
    let mut stats = PlayerStats::new("", word_size, Session::MAX_GUESSES);
    // Nothing saved yet just reports zeros
    let _ = stats.load();
    render::print_stats_report(&stats, no_color, 0);
}
