/// Mask application and penalty scoring
use crate::models::{BitMatrix, MaskPattern};

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

/// XOR a mask pattern over every non-reserved module
///
/// Applying the same pattern twice restores the grid, which is what the
/// automatic selection loop relies on.
pub fn apply_mask(modules: &mut BitMatrix, reserved: &BitMatrix, pattern: MaskPattern) {
    let size = modules.size();
    for y in 0..size {
        for x in 0..size {
            if !reserved.get(x, y) && pattern.is_masked(y, x) {
                modules.toggle(x, y);
            }
        }
    }
}

/// Sliding window of run lengths for finder-like pattern detection
///
/// Tracks the last seven same-color run lengths along a line; a
/// 1:1:3:1:1 core flanked by at least four light modules on either side
/// counts as one occurrence. The symbol edge counts as light border.
struct FinderPenalty {
    size: i32,
    run_history: [i32; 7],
}

impl FinderPenalty {
    fn new(size: i32) -> Self {
        Self {
            size,
            run_history: [0; 7],
        }
    }

    /// Push a finished run onto the history
    fn add_history(&mut self, mut run_length: i32) {
        if self.run_history[0] == 0 {
            run_length += self.size; // Treat the leading edge as light
        }
        self.run_history.copy_within(0..6, 1);
        self.run_history[0] = run_length;
    }

    /// Count finder-like patterns ending at the current position
    fn count_patterns(&self) -> i32 {
        let h = &self.run_history;
        let n = h[1];
        debug_assert!(n <= self.size * 3);
        let core = n > 0 && h[2] == n && h[3] == n * 3 && h[4] == n && h[5] == n;
        i32::from(core && h[0] >= n * 4 && h[6] >= n)
            + i32::from(core && h[6] >= n * 4 && h[0] >= n)
    }

    /// Flush the trailing run plus the light edge, then count
    fn terminate_and_count(mut self, current_run_color: bool, mut current_run_length: i32) -> i32 {
        if current_run_color {
            self.add_history(current_run_length);
            current_run_length = 0;
        }
        current_run_length += self.size; // Trailing edge is light
        self.add_history(current_run_length);
        self.count_patterns()
    }
}

/// Penalty score of the grid under the four standard terms
///
/// N1 punishes same-color runs of five or more, N2 solid 2x2 blocks,
/// N3 finder-like 1:1:3:1:1 patterns in rows or columns, N4 dark/light
/// imbalance. Lower is better.
pub fn penalty_score(modules: &BitMatrix) -> i32 {
    let size = modules.size();
    let mut result: i32 = 0;

    // Rows: runs and finder-like patterns
    for y in 0..size {
        let mut run_color = false;
        let mut run_x: i32 = 0;
        let mut finder = FinderPenalty::new(size as i32);
        for x in 0..size {
            if modules.get(x, y) == run_color {
                run_x += 1;
                if run_x == 5 {
                    result += PENALTY_N1;
                } else if run_x > 5 {
                    result += 1;
                }
            } else {
                finder.add_history(run_x);
                if !run_color {
                    result += finder.count_patterns() * PENALTY_N3;
                }
                run_color = modules.get(x, y);
                run_x = 1;
            }
        }
        result += finder.terminate_and_count(run_color, run_x) * PENALTY_N3;
    }

    // Columns: same scan, transposed
    for x in 0..size {
        let mut run_color = false;
        let mut run_y: i32 = 0;
        let mut finder = FinderPenalty::new(size as i32);
        for y in 0..size {
            if modules.get(x, y) == run_color {
                run_y += 1;
                if run_y == 5 {
                    result += PENALTY_N1;
                } else if run_y > 5 {
                    result += 1;
                }
            } else {
                finder.add_history(run_y);
                if !run_color {
                    result += finder.count_patterns() * PENALTY_N3;
                }
                run_color = modules.get(x, y);
                run_y = 1;
            }
        }
        result += finder.terminate_and_count(run_color, run_y) * PENALTY_N3;
    }

    // 2x2 blocks of one color
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = modules.get(x, y);
            if color == modules.get(x + 1, y)
                && color == modules.get(x, y + 1)
                && color == modules.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    // Dark/light balance: k steps of 5% deviation from 50%
    let dark = modules.count_dark() as i64;
    let total = (size * size) as i64;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    debug_assert!((0..=9).contains(&k));
    result += k as i32 * PENALTY_N4;

    debug_assert!((0..=2_568_888).contains(&result));
    result
}
