// Levenshtein edit distance

/// Minimum number of single-character insertions, deletions or
/// substitutions that turn `a` into `b`.
///
/// Fills the full `(|a|+1) x (|b|+1)` grid where cell `(i, j)` holds the
/// distance between the first `i` characters of `a` and the first `j`
/// characters of `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// [`distance`] over arbitrary symbol slices.
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let cols = b.len() + 1;
    let mut grid = vec![0usize; (a.len() + 1) * cols];

    for i in 0..=a.len() {
        grid[i * cols] = i;
    }
    for j in 0..=b.len() {
        grid[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let diagonal = grid[(i - 1) * cols + (j - 1)];
            grid[i * cols + j] = if a[i - 1] == b[j - 1] {
                diagonal
            } else {
                let up = grid[(i - 1) * cols + j];
                let left = grid[i * cols + (j - 1)];
                1 + up.min(left).min(diagonal)
            };
        }
    }

    grid[a.len() * cols + b.len()]
}

/// Distance between `a` and `b` if it is at most `max`, else `None`.
///
/// Gives the same answer as comparing [`levenshtein`] against `max`, but
/// keeps only two rows and stops as soon as a whole row exceeds `max`.
/// Candidates whose lengths differ by more than `max` are rejected without
/// filling any rows.
pub fn levenshtein_within<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut row_min = i;
        for j in 1..=b.len() {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
            row_min = row_min.min(curr[j]);
        }
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let d = prev[b.len()];
    (d <= max).then_some(d)
}
