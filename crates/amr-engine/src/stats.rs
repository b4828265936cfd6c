//! Read-only summaries of the agent list for chart and heatmap renderers.

use crate::Agent;

/// Count alive agents per resistance bin over `[0, 1]`.
///
/// Bins are equal-width; a resistance of exactly 1 falls in the last bin.
/// Returns an empty vector for `bins == 0`.
pub fn resistance_histogram(agents: &[Agent], bins: usize) -> Vec<usize> {
    let mut counts = vec![0; bins];
    if bins == 0 {
        return counts;
    }
    for a in agents.iter().filter(|a| a.alive) {
        let bin = ((a.resistance * bins as f64) as usize).min(bins - 1);
        counts[bin] += 1;
    }
    counts
}

/// Alive-agent counts on a regular grid anchored at the plate origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensityGrid {
    pub cols:   usize,
    pub rows:   usize,
    /// Row-major, `rows × cols`.
    pub counts: Vec<usize>,
}

impl DensityGrid {
    pub fn get(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| self.counts[row * self.cols + col])
    }

    /// Largest cell count, or 0 for an empty grid.
    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bucket alive agents into `cols × rows` square cells of side `cell_size`.
///
/// Cell `(c, r)` covers `[c·size, (c+1)·size) × [r·size, (r+1)·size)`.
/// Agents outside the grid (including offspring jittered past the plate
/// edge) are not counted.
pub fn density_grid(agents: &[Agent], cell_size: f64, cols: usize, rows: usize) -> DensityGrid {
    let mut counts = vec![0; cols * rows];
    if cell_size > 0.0 {
        for a in agents.iter().filter(|a| a.alive) {
            let (x, y) = (a.position.x, a.position.y);
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (col, row) = ((x / cell_size) as usize, (y / cell_size) as usize);
            if col < cols && row < rows {
                counts[row * cols + col] += 1;
            }
        }
    }
    DensityGrid { cols, rows, counts }
}
