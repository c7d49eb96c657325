use std::ops::{Index, Mul};

/// Modulus applied to every matrix entry.
pub const MOD: u64 = 1_000_000_007;

/// Square `n x n` matrix with entries reduced modulo [`MOD`].
///
/// Entries are stored row-major. The dimension is fixed at construction and
/// every entry lies in `[0, MOD)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    entries: Vec<u64>,
}

impl Matrix {
    /// Matrix of the given dimension filled with zeros.
    pub fn zero(dim: usize) -> Self {
        Self {
            dim,
            entries: vec![0; dim * dim],
        }
    }

    /// Multiplicative unit: 1 on the diagonal, 0 elsewhere.
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zero(dim);
        for i in 0..dim {
            m.entries[i * dim + i] = 1;
        }
        m
    }

    /// Builds a matrix from its rows, reducing every entry modulo [`MOD`].
    ///
    /// # Panics
    /// Panics if any row's length differs from the number of rows.
    ///
    /// # Example
    /// ```
    /// use corridor_tiling::math::{Matrix, MOD};
    /// let m = Matrix::from_rows(vec![vec![1, MOD + 2], vec![0, 1]]);
    /// assert_eq!(m[(0, 1)], 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Self {
        let dim = rows.len();
        let mut entries = Vec::with_capacity(dim * dim);
        for row in rows {
            assert_eq!(row.len(), dim, "matrix rows must form a square");
            entries.extend(row.into_iter().map(|v| v % MOD));
        }
        Self { dim, entries }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn row(&self, i: usize) -> &[u64] {
        &self.entries[i * self.dim..(i + 1) * self.dim]
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity(self.dim)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = u64;

    fn index(&self, (i, j): (usize, usize)) -> &u64 {
        assert!(
            i < self.dim && j < self.dim,
            "index ({i}, {j}) out of range for {dim}x{dim} matrix",
            dim = self.dim
        );
        &self.entries[i * self.dim + j]
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        matrix_mult(self, rhs)
    }
}

// Modular matrix multiplication for square matrices of equal dimension.
// Entries are < MOD, so acc + a * b < MOD + (MOD - 1)^2 fits in a u64.
pub fn matrix_mult(m1: &Matrix, m2: &Matrix) -> Matrix {
    assert_eq!(m1.dim, m2.dim, "matrix dimension mismatch");
    let n = m1.dim;
    let mut result = Matrix::zero(n);

    for i in 0..n {
        for j in 0..n {
            let mut acc = 0u64;
            for k in 0..n {
                acc = (acc + m1.entries[i * n + k] * m2.entries[k * n + j]) % MOD;
            }
            result.entries[i * n + j] = acc;
        }
    }

    result
}

// Binary exponentiation: O(log exp) multiplications, each O(dim^3).
pub fn matrix_pow(mut base: Matrix, mut exp: u64) -> Matrix {
    let mut result = Matrix::identity(base.dim);

    while exp > 0 {
        if exp % 2 == 1 {
            result = matrix_mult(&result, &base);
        }
        base = matrix_mult(&base, &base);
        exp /= 2;
    }

    result
}
