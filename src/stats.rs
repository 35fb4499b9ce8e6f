//! Per-user player statistics
//!
//! A small plain-text file: play count, win count, current streak, max
//! streak, last-win timestamp, then one line per guess-count bucket. The
//! file is keyed by player name and game shape (word size x max guesses) so
//! different configurations never share counters. All I/O is best-effort;
//! gameplay never depends on it succeeding.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Player statistics counters and their backing file
#[derive(Debug)]
pub struct PlayerStats {
    path: Option<PathBuf>,

    pub play_count: u64,
    pub win_count: u64,
    pub cur_streak: u64,
    pub max_streak: u64,
    /// Epoch seconds of the most recent win, 0 if never
    pub last_win: i64,
    /// Index N holds the number of wins in N+1 guesses
    pub guess_dist: Vec<u64>,
}

impl PlayerStats {
    /// Stats for the given player name and game shape
    ///
    /// An empty name is the anonymous default. The backing file lives in
    /// the per-user data directory, e.g. `mordle/stats-5x6.txt` or
    /// `mordle/stats-alice-5x6.txt`.
    #[must_use]
    pub fn new(name: &str, word_size: usize, max_guesses: usize) -> Self {
        let file_name = if name.is_empty() {
            format!("stats-{word_size}x{max_guesses}.txt")
        } else {
            format!("stats-{name}-{word_size}x{max_guesses}.txt")
        };
        let path = stats_dir().map(|dir| dir.join(file_name));
        Self::at_path(path, max_guesses)
    }

    fn at_path(path: Option<PathBuf>, max_guesses: usize) -> Self {
        Self {
            path,
            play_count: 0,
            win_count: 0,
            cur_streak: 0,
            max_streak: 0,
            last_win: 0,
            guess_dist: vec![0; max_guesses],
        }
    }

    /// Load counters from the backing file
    ///
    /// # Errors
    /// Fails if the file is missing, unreadable, or malformed; the counters
    /// are left untouched in that case and callers play on from zeros.
    pub fn load(&mut self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Err(io::Error::other("no stats directory"));
        };
        let content = fs::read_to_string(path)?;
        let mut lines = content.lines();

        let mut next = || -> io::Result<u64> {
            lines
                .next()
                .and_then(|l| l.trim().parse().ok())
                .ok_or_else(|| io::Error::other("malformed stats file"))
        };

        let play_count = next()?;
        let win_count = next()?;
        let cur_streak = next()?;
        let max_streak = next()?;
        let last_win = i64::try_from(next()?).unwrap_or(0);
        let mut guess_dist = Vec::with_capacity(self.guess_dist.len());
        for _ in 0..self.guess_dist.len() {
            guess_dist.push(next()?);
        }

        self.play_count = play_count;
        self.win_count = win_count;
        self.cur_streak = cur_streak;
        self.max_streak = max_streak;
        self.last_win = last_win;
        self.guess_dist = guess_dist;
        Ok(())
    }

    /// Write the counters out, one value per line
    ///
    /// # Errors
    /// Fails if the stats directory cannot be created or the file cannot be
    /// written. Callers ignore the failure; stats are best-effort.
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Err(io::Error::other("no stats directory"));
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut out = String::new();
        for value in [
            self.play_count,
            self.win_count,
            self.cur_streak,
            self.max_streak,
        ] {
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out.push_str(&self.last_win.to_string());
        out.push('\n');
        for g in &self.guess_dist {
            out.push_str(&g.to_string());
            out.push('\n');
        }

        fs::write(path, out)
    }

    /// Record the start of a game
    pub fn attempt(&mut self) {
        self.play_count += 1;
    }

    /// Record a win in `guesses` guesses
    pub fn win(&mut self, guesses: usize) {
        self.last_win = chrono::Utc::now().timestamp();
        self.win_count += 1;

        self.cur_streak += 1;
        if self.max_streak < self.cur_streak {
            self.max_streak = self.cur_streak;
        }

        if guesses >= 1 && guesses <= self.guess_dist.len() {
            self.guess_dist[guesses - 1] += 1;
        }
    }

    /// Record a loss
    pub fn lose(&mut self) {
        self.cur_streak = 0;
    }
}

/// The per-user directory holding stats files
fn stats_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("mordle"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_in(dir: &std::path::Path) -> PlayerStats {
        PlayerStats::at_path(Some(dir.join("stats-5x6.txt")), 6)
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut stats = stats_in(dir.path());
        stats.attempt();
        stats.win(3);
        stats.attempt();
        stats.lose();
        stats.attempt();
        stats.win(5);
        stats.save().unwrap();

        let mut loaded = stats_in(dir.path());
        loaded.load().unwrap();
        assert_eq!(loaded.play_count, 3);
        assert_eq!(loaded.win_count, 2);
        assert_eq!(loaded.cur_streak, 1);
        assert_eq!(loaded.max_streak, 1);
        assert_eq!(loaded.guess_dist, vec![0, 0, 1, 0, 1, 0]);
        assert!(loaded.last_win > 0);
    }

    #[test]
    fn streaks_grow_and_reset() {
        let mut stats = PlayerStats::at_path(None, 6);
        stats.win(1);
        stats.win(2);
        stats.win(3);
        assert_eq!(stats.cur_streak, 3);
        assert_eq!(stats.max_streak, 3);

        stats.lose();
        assert_eq!(stats.cur_streak, 0);
        assert_eq!(stats.max_streak, 3);

        stats.win(4);
        assert_eq!(stats.cur_streak, 1);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn out_of_range_guess_counts_are_dropped() {
        let mut stats = PlayerStats::at_path(None, 6);
        stats.win(0);
        stats.win(7);
        assert!(stats.guess_dist.iter().all(|&g| g == 0));
        assert_eq!(stats.win_count, 2);
    }

    #[test]
    fn load_failure_leaves_counters_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut stats = stats_in(dir.path());
        stats.attempt();
        assert!(stats.load().is_err()); // no file yet
        assert_eq!(stats.play_count, 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats-5x6.txt");
        fs::write(&path, "1\n2\nnot-a-number\n").unwrap();

        let mut stats = PlayerStats::at_path(Some(path), 6);
        assert!(stats.load().is_err());
        assert_eq!(stats.play_count, 0);
    }

    #[test]
    fn save_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stats-5x6.txt");
        let stats = PlayerStats::at_path(Some(path.clone()), 6);
        stats.save().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_name_is_keyed_by_name_and_shape() {
        let anon = PlayerStats::new("", 5, 6);
        let named = PlayerStats::new("alice", 5, 6);
        let other = PlayerStats::new("", 6, 6);
        if let (Some(a), Some(n), Some(o)) = (&anon.path, &named.path, &other.path) {
            assert!(a.ends_with("mordle/stats-5x6.txt"));
            assert!(n.ends_with("mordle/stats-alice-5x6.txt"));
            assert!(o.ends_with("mordle/stats-6x6.txt"));
        }
    }
}
