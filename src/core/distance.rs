//! Edit Distance
//!
//! Levenshtein distance between two strings, counted over Unicode scalar
//! values rather than bytes. Insertions, deletions and substitutions all
//! cost 1.

/// Full dynamic-programming table for one pair of strings.
///
/// Cell `(i, j)` holds the edit distance between the first `i` chars of `a`
/// and the first `j` chars of `b`. Row 0 and column 0 are always the
/// identity sequences `0, 1, 2, ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Build the `(len(a) + 1) x (len(b) + 1)` table for `a` and `b`
    pub fn build(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0; rows * cols];

        // Base cases: transforming to/from the empty prefix
        for (i, row) in cells.chunks_mut(cols).enumerate() {
            row[0] = i;
        }
        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }

        for i in 1..rows {
            for j in 1..cols {
                let idx = i * cols + j;
                let diagonal = cells[idx - cols - 1];
                cells[idx] = if a[i - 1] == b[j - 1] {
                    diagonal
                } else {
                    let insertion = cells[idx - 1];
                    let deletion = cells[idx - cols];
                    1 + diagonal.min(insertion).min(deletion)
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of rows (`len(a) + 1`)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len(b) + 1`)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`, or `None` when out of bounds
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` of the table
    pub fn row(&self, i: usize) -> Option<&[usize]> {
        self.cells.chunks(self.cols).nth(i)
    }

    /// The edit distance between the full strings (bottom-right cell)
    pub fn distance(&self) -> usize {
        // Never empty: the table is at least 1x1
        self.cells[self.cells.len() - 1]
    }
}

/// Calculate the Levenshtein distance between `a` and `b`.
///
/// Same recurrence as [`DistanceMatrix::build`], but keeps only two rows
/// sized to the shorter input. No normalization is applied: callers fold
/// case themselves if they need to.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Distance is symmetric, so walk the longer string and index the shorter
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev: Vec<usize> = (0..=inner.len()).collect();
    let mut curr = vec![0; inner.len() + 1];

    for (i, &ca) in outer.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in inner.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(curr[j]).min(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
