//! Winning line analysis for Tic-Tac-Total boards

/// Index sets for every line on a `size`-sided board: all rows, all columns,
/// and the two main diagonals. Cell indices are row-major.
pub fn line_indices(size: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        lines.push((0..size).map(|col| row * size + col).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| row * size + col).collect());
    }
    lines.push((0..size).map(|i| i * size + i).collect());
    lines.push((0..size).map(|i| i * size + (size - 1 - i)).collect());
    lines
}

/// Target-sum analysis over the lines of a board
#[derive(Debug, Clone)]
pub struct LineAnalyzer {
    target: u32,
    lines: Vec<Vec<usize>>,
}

impl LineAnalyzer {
    pub fn new(size: usize, target: u32) -> Self {
        LineAnalyzer {
            target,
            lines: line_indices(size),
        }
    }

    /// Check whether any complete line sums exactly to the target
    pub fn has_win(&self, cells: &[Option<u8>]) -> bool {
        self.lines
            .iter()
            .any(|line| Self::line_total(cells, line) == Some(self.target))
    }

    /// Find `(cell index, digit)` placements that would complete a line at
    /// the target sum, drawing digits from `numbers`. A line qualifies when
    /// exactly one of its cells is open and the shortfall is one of the
    /// given digits.
    pub fn completions(&self, cells: &[Option<u8>], numbers: &[u8]) -> Vec<(usize, u8)> {
        let mut found: Vec<(usize, u8)> = self
            .lines
            .iter()
            .filter_map(|line| self.completion_in_line(cells, line))
            .filter(|(_, digit)| numbers.contains(digit))
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Sum of a line, or `None` if any cell in it is open
    fn line_total(cells: &[Option<u8>], line: &[usize]) -> Option<u32> {
        line.iter()
            .try_fold(0u32, |total, &idx| cells[idx].map(|n| total + u32::from(n)))
    }

    /// The single open cell of a line together with the digit that would
    /// bring the line to the target, if the line has exactly one open cell
    /// and the shortfall fits in a digit
    fn completion_in_line(&self, cells: &[Option<u8>], line: &[usize]) -> Option<(usize, u8)> {
        let mut open = None;
        let mut total = 0u32;
        for &idx in line {
            match cells[idx] {
                Some(n) => total += u32::from(n),
                None => {
                    if open.is_some() {
                        return None;
                    }
                    open = Some(idx);
                }
            }
        }
        let idx = open?;
        let shortfall = self.target.checked_sub(total)?;
        u8::try_from(shortfall).ok().map(|digit| (idx, digit))
    }
}
