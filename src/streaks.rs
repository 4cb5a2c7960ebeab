use crate::models::CompletionHistory;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    pub current: u32,
    pub best: u32,
}

/// Walks the log newest-first. The current streak opens only when the newest
/// tracked date is completed and then grows on every older completed entry,
/// date gaps included. A miss on the newest date zeroes both counters and
/// ends the walk; a miss anywhere else only breaks the run feeding the best
/// streak. Runs are measured by entry order, not calendar adjacency.
pub fn calculate_streaks(history: &CompletionHistory) -> Streaks {
    let mut streaks = Streaks::default();
    let mut run = 0u32;

    for (i, completed) in history.values().rev().enumerate() {
        if *completed {
            run += 1;
            if i == 0 || streaks.current > 0 {
                streaks.current += 1;
            }
        } else {
            if i == 0 {
                streaks.current = 0;
                return streaks;
            }
            run = 0;
        }
        streaks.best = streaks.best.max(run);
    }

    streaks
}
