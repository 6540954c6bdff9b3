//! Scoring module - line-clear points and best-score bookkeeping
//!
//! All rows removed by a single lock score together as one event: two rows
//! cleared at once are worth 100, not 2 x 40, whether or not they are adjacent.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows in one lock
///
/// 0 and anything above 4 score nothing; a tetromino spans at most four rows.
pub fn line_clear_points(lines: usize) -> u32 {
    if lines > 4 {
        return 0;
    }
    LINE_SCORES[lines]
}

/// Running score plus the best score carried in from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    current: u32,
    best: u32,
}

impl Score {
    pub fn new(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Award points for one lock event and return them
    ///
    /// Raises `best` when the running score passes it.
    pub fn award_lines(&mut self, lines: usize) -> u32 {
        let points = line_clear_points(lines);
        self.current = self.current.saturating_add(points);
        if self.current > self.best {
            self.best = self.current;
        }
        points
    }

    /// Zero the running score; the best is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 40);
        assert_eq!(line_clear_points(2), 100);
        assert_eq!(line_clear_points(3), 300);
        assert_eq!(line_clear_points(4), 1200);
        assert_eq!(line_clear_points(5), 0);
    }

    #[test]
    fn test_combined_clear_beats_sequential_singles() {
        let mut combined = Score::new(0);
        combined.award_lines(2);

        let mut sequential = Score::new(0);
        sequential.award_lines(1);
        sequential.award_lines(1);

        assert_eq!(combined.current(), 100);
        assert_eq!(sequential.current(), 80);
    }

    #[test]
    fn test_best_follows_score_only_upwards() {
        let mut score = Score::new(250);
        score.award_lines(3);
        assert_eq!(score.current(), 300);
        assert_eq!(score.best(), 300);

        score.reset();
        assert_eq!(score.current(), 0);
        assert_eq!(score.best(), 300);

        score.award_lines(1);
        assert_eq!(score.best(), 300);
    }

    #[test]
    fn test_zero_lines_award_nothing() {
        let mut score = Score::new(0);
        assert_eq!(score.award_lines(0), 0);
        assert_eq!(score.current(), 0);
        assert_eq!(score.best(), 0);
    }
}
