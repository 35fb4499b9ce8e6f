//! Command implementations

pub mod list;
pub mod play;
pub mod rules;
pub mod stats;

pub use list::run_list;
pub use play::run_play;
pub use rules::print_rules;
pub use stats::print_player_stats;
