//! Per-step growth metrics.

use std::time::Duration;

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`.
pub(crate) fn elapsed_us(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Timing and progress data for the most recent growth step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
    /// Cells that went from unvisited to visited.
    pub newly_visited: usize,
    /// Cells whose distance or owners changed.
    pub changed: usize,
    /// Tie cells after the step.
    pub tie_cells: usize,
    /// Visited cells after the step.
    pub visited_total: usize,
    /// Store generation after the step.
    pub generation: u64,
}

impl StepMetrics {
    /// Whether the step changed nothing.
    pub fn converged(&self) -> bool {
        self.changed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.visited_total, 0);
        assert_eq!(m.generation, 0);
        assert!(m.converged());
    }

    #[test]
    fn elapsed_time_saturates() {
        assert_eq!(elapsed_us(Duration::from_millis(3)), 3_000);
        assert_eq!(elapsed_us(Duration::MAX), u64::MAX);
    }
}
