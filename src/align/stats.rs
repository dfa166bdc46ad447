use serde::Serialize;

/// Work and memory counters collected during one alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AlignmentStats {
    /// Linear-space cost sweeps run (two per divide step)
    pub sweeps: usize,

    /// Sub-problems handed to the full aligner
    pub base_cases: usize,

    /// Deepest recursion level reached (0 = the top-level call)
    pub max_depth: usize,

    /// Most DP row cells live at once in a single sweep
    pub peak_row_cells: usize,

    /// Largest cost matrix built by a base case, in cells
    pub peak_base_cells: usize,
}

impl AlignmentStats {
    pub(crate) fn record_sweep(&mut self, live_cells: usize) {
        self.sweeps += 1;
        self.peak_row_cells = self.peak_row_cells.max(live_cells);
    }

    pub(crate) fn record_base_case(&mut self, n: usize, m: usize, depth: usize) {
        self.base_cases += 1;
        self.peak_base_cells = self.peak_base_cells.max((n + 1) * (m + 1));
        self.record_depth(depth);
    }

    pub(crate) fn record_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peaks_keep_maximum() {
        let mut stats = AlignmentStats::default();
        stats.record_sweep(10);
        stats.record_sweep(4);
        stats.record_base_case(1, 5, 3);
        stats.record_base_case(0, 2, 1);

        assert_eq!(stats.sweeps, 2);
        assert_eq!(stats.peak_row_cells, 10);
        assert_eq!(stats.base_cases, 2);
        assert_eq!(stats.peak_base_cells, 12);
        assert_eq!(stats.max_depth, 3);
    }
}
