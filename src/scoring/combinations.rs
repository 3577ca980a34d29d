/// Iterator over all `k`-element index subsets of `0..n`, in lexicographic
/// order.
///
/// Replaces hand-written position tables: `Combinations::new(5, 2)` yields the
/// ten pairs a fifteen count checks, `Combinations::new(5, 4)` the five
/// four-card run candidates, and so on.
///
/// ```
/// use cribbage_rs::scoring::Combinations;
///
/// let pairs: Vec<Vec<usize>> = Combinations::new(3, 2).collect();
/// assert_eq!(pairs, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), done: k > n }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();
        let k = self.indices.len();

        // Find rightmost index that can be incremented
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - (k - i) {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}

/// Every subset of `0..n` with at least `min` elements, smallest subsets first.
pub fn subsets_of_at_least(n: usize, min: usize) -> impl Iterator<Item = Vec<usize>> {
    (min..=n).flat_map(move |k| Combinations::new(n, k))
}
