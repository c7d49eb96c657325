use tracing::debug;

use crate::math::{matrix_pow, Matrix, MOD};

/// Linear recurrence of order `k` encoded as a `k x k` transition matrix.
///
/// The transition advances the state `(f(n-1), ..., f(n-k))` to
/// `(f(n), ..., f(n-k+1))`. The seed holds the base cases with the highest
/// index first: `(f(k-1), ..., f(0))`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recurrence {
    transition: Matrix,
    seed: Vec<u64>,
}

impl Recurrence {
    /// # Panics
    /// Panics if the seed length differs from the transition's dimension, or
    /// if the transition is empty.
    pub fn new(transition: Matrix, seed: Vec<u64>) -> Self {
        assert!(transition.dim() > 0, "recurrence must have order >= 1");
        assert_eq!(
            seed.len(),
            transition.dim(),
            "seed length must match the transition dimension"
        );
        let seed = seed.into_iter().map(|v| v % MOD).collect();
        Self { transition, seed }
    }

    /// Domino tilings of a 2xN corridor.
    ///
    /// The last column is covered either by one vertical domino or by two
    /// stacked horizontal ones, so `f(n) = f(n-1) + f(n-2)`, carried here in a
    /// third-order state with seed `(f(2), f(1), f(0)) = (2, 1, 1)`.
    pub fn domino() -> Self {
        Self::new(
            Matrix::from_rows(vec![vec![1, 1, 0], vec![1, 0, 0], vec![0, 1, 0]]),
            vec![2, 1, 1],
        )
    }

    pub fn order(&self) -> usize {
        self.seed.len()
    }

    pub fn transition(&self) -> &Matrix {
        &self.transition
    }

    /// Evaluates `f(n) mod MOD` in O(log n) matrix multiplications.
    ///
    /// # Example
    /// ```
    /// use corridor_tiling::math::Matrix;
    /// use corridor_tiling::tiling::Recurrence;
    /// // f(n) = 2 f(n-1) + f(n-3)
    /// let r = Recurrence::new(
    ///     Matrix::from_rows(vec![vec![2, 0, 1], vec![1, 0, 0], vec![0, 1, 0]]),
    ///     vec![2, 1, 1],
    /// );
    /// assert_eq!(r.nth(4), 11);
    /// ```
    pub fn nth(&self, n: u64) -> u64 {
        let top = (self.order() - 1) as u64;
        if n <= top {
            return self.seed[(top - n) as usize];
        }

        let exponent = n - top;
        debug!(n, exponent, order = self.order(), "raising transition matrix");
        let power = matrix_pow(self.transition.clone(), exponent);

        power
            .row(0)
            .iter()
            .zip(&self.seed)
            .fold(0, |acc, (&t, &s)| (acc + t * s) % MOD)
    }
}

/// Number of domino tilings of a 2x`n` corridor, modulo [`MOD`].
///
/// # Example
/// ```
/// use corridor_tiling::tiling::count_ways;
/// assert_eq!(count_ways(3), 3);
/// assert_eq!(count_ways(10), 89);
/// ```
pub fn count_ways(n: u64) -> u64 {
    match n {
        0 => 1,
        1 => 1,
        2 => 2,
        _ => Recurrence::domino().nth(n),
    }
}

/// Computes the first `limit` tiling counts by direct iteration.
///
/// Runs in O(n) time and O(n) space, independently of the matrix path.
///
/// # Example
/// ```
/// use corridor_tiling::tiling::seq_basic;
/// assert_eq!(seq_basic(6), vec![1, 1, 2, 3, 5, 8]);
/// ```
pub fn seq_basic(limit: usize) -> Vec<u64> {
    let mut counts: Vec<u64> = Vec::with_capacity(limit);
    for i in 0..limit {
        let next = if i < 2 {
            1
        } else {
            (counts[i - 1] + counts[i - 2]) % MOD
        };
        counts.push(next);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::One;
    use rayon::prelude::*;

    // Exact count without any modular reduction.
    fn exact_ways(n: u64) -> BigUint {
        let (mut a, mut b) = (BigUint::one(), BigUint::one());
        for _ in 0..n {
            let next = &a + &b;
            a = b;
            b = next;
        }
        a
    }

    #[test]
    fn base_cases() {
        assert_eq!(count_ways(0), 1);
        assert_eq!(count_ways(1), 1);
        assert_eq!(count_ways(2), 2);
    }

    #[test]
    fn small_corridors() {
        assert_eq!(count_ways(3), 3);
        assert_eq!(count_ways(4), 5);
        assert_eq!(count_ways(10), 89);
    }

    #[test]
    fn satisfies_recurrence() {
        for n in 2..=30 {
            assert_eq!(
                count_ways(n),
                (count_ways(n - 1) + count_ways(n - 2)) % MOD,
                "n = {n}"
            );
        }
    }

    #[test]
    fn matches_iterative_oracle() {
        let oracle = seq_basic(501);
        for (n, &expected) in oracle.iter().enumerate() {
            assert_eq!(count_ways(n as u64), expected, "n = {n}");
        }
    }

    #[test]
    fn matches_exact_count_after_reduction() {
        assert_eq!(count_ways(50), 365_010_934);
        for n in [50, 97, 1_000, 4_321] {
            let expected = exact_ways(n) % BigUint::from(MOD);
            assert_eq!(BigUint::from(count_ways(n)), expected, "n = {n}");
        }
    }

    #[test]
    fn huge_n_stays_in_range() {
        for n in [1 << 32, 1 << 62, u64::MAX] {
            assert!(count_ways(n) < MOD);
        }
    }

    #[test]
    fn concurrent_calls_agree() {
        let sequential: Vec<u64> = (0..2_000).map(count_ways).collect();
        let parallel: Vec<u64> = (0..2_000u64).into_par_iter().map(count_ways).collect();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn domino_transition_powers() {
        let t = Recurrence::domino().transition().clone();
        assert!(matrix_pow(t.clone(), 0).is_identity());
        assert_eq!(matrix_pow(t.clone(), 1), t);
    }

    #[test]
    fn generic_recurrence() {
        // f(n) = 2 f(n-1) + f(n-3)
        let r = Recurrence::new(
            Matrix::from_rows(vec![vec![2, 0, 1], vec![1, 0, 0], vec![0, 1, 0]]),
            vec![2, 1, 1],
        );
        let values: Vec<u64> = (0..8).map(|n| r.nth(n)).collect();
        assert_eq!(values, vec![1, 1, 2, 5, 11, 24, 53, 117]);
    }

    #[test]
    fn first_order_recurrence_is_geometric() {
        let r = Recurrence::new(Matrix::from_rows(vec![vec![3]]), vec![1]);
        assert_eq!(r.nth(0), 1);
        assert_eq!(r.nth(5), 243);
    }

    #[test]
    #[should_panic(expected = "seed length")]
    fn seed_must_match_order() {
        let _ = Recurrence::new(Matrix::identity(3), vec![1, 1]);
    }

    #[test]
    fn seq_basic_edges() {
        assert!(seq_basic(0).is_empty());
        assert_eq!(seq_basic(1), vec![1]);
    }
}
